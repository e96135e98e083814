//! Disorder measures used to score attribute subsets.
//!
//! Lower is better; zero means every group induced by the attributes is
//! homogeneous with respect to the decision.

pub mod chaos;

pub use chaos::{conflicts_count, entropy, gini_impurity, ChaosFn};

use crate::core::types::ChaosMeasure;

impl ChaosMeasure {
    /// The function implementing this measure.
    pub fn function(&self) -> ChaosFn {
        match self {
            ChaosMeasure::Entropy => entropy,
            ChaosMeasure::GiniImpurity => gini_impurity,
            ChaosMeasure::ConflictsCount => conflicts_count,
        }
    }
}
