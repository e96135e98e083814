//! Core data types for skrough-rust.
//!
//! This module defines the fundamental index and code types shared by the
//! partition engine, the processing pipeline and the result value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::RoughSetError;

/// Factorized categorical value. Column `i` of a table holds codes in
/// `[0, x_counts[i])`.
pub type Code = usize;

/// Equivalence class label stored in a [`GroupIndex`](crate::partition::GroupIndex).
pub type GroupId = usize;

/// Position of a conditional attribute (column) in the table.
pub type AttrIndex = usize;

/// Position of an object (row) in the table.
pub type ObjIndex = usize;

/// Working set of attribute or object indices passed between hooks.
pub type Elements = Vec<usize>;

/// Disorder (chaos) measure applied to class-decision distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChaosMeasure {
    /// Weighted Shannon entropy, in bits
    Entropy,
    /// Weighted Gini impurity
    GiniImpurity,
    /// Number of object pairs that share a group but disagree on the decision
    ConflictsCount,
}

impl Default for ChaosMeasure {
    fn default() -> Self {
        ChaosMeasure::Entropy
    }
}

impl fmt::Display for ChaosMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChaosMeasure::Entropy => write!(f, "entropy"),
            ChaosMeasure::GiniImpurity => write!(f, "gini_impurity"),
            ChaosMeasure::ConflictsCount => write!(f, "conflicts_count"),
        }
    }
}

impl FromStr for ChaosMeasure {
    type Err = RoughSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entropy" => Ok(ChaosMeasure::Entropy),
            "gini" | "gini_impurity" => Ok(ChaosMeasure::GiniImpurity),
            "conflicts" | "conflicts_count" => Ok(ChaosMeasure::ConflictsCount),
            other => Err(RoughSetError::invalid_parameter(
                "chaos_measure",
                other,
                "expected one of entropy, gini_impurity, conflicts_count",
            )),
        }
    }
}

/// Policy for the objects kept when a bireduct is finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectSelection {
    /// Every object agreeing with the decision drawn for its group
    Consistent,
    /// Exactly one object per group
    Representatives,
}

impl Default for ObjectSelection {
    fn default() -> Self {
        ObjectSelection::Consistent
    }
}

impl fmt::Display for ObjectSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectSelection::Consistent => write!(f, "consistent"),
            ObjectSelection::Representatives => write!(f, "representatives"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chaos_measure_display_round_trip() {
        for measure in [
            ChaosMeasure::Entropy,
            ChaosMeasure::GiniImpurity,
            ChaosMeasure::ConflictsCount,
        ] {
            let parsed: ChaosMeasure = measure.to_string().parse().unwrap();
            assert_eq!(parsed, measure);
        }
    }

    #[test]
    fn test_chaos_measure_aliases() {
        assert_eq!("gini".parse::<ChaosMeasure>().unwrap(), ChaosMeasure::GiniImpurity);
        assert_eq!(
            "conflicts".parse::<ChaosMeasure>().unwrap(),
            ChaosMeasure::ConflictsCount
        );
        assert!("variance".parse::<ChaosMeasure>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ChaosMeasure::default(), ChaosMeasure::Entropy);
        assert_eq!(ObjectSelection::default(), ObjectSelection::Consistent);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ChaosMeasure::GiniImpurity).unwrap();
        assert_eq!(json, "\"gini_impurity\"");
        let selection: ObjectSelection = serde_json::from_str("\"representatives\"").unwrap();
        assert_eq!(selection, ObjectSelection::Representatives);
    }
}
