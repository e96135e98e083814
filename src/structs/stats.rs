//! Chaos score summary used to calibrate stopping thresholds.

use std::fmt;

use ndarray::{ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, RoughSetError};
use crate::core::traits::Persistable;
use crate::core::types::{AttrIndex, Code};
use crate::measures::ChaosFn;
use crate::partition::GroupIndex;

/// Chaos of the decision under no attributes and under all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaosScoreStats {
    /// Chaos with no attributes (one group)
    pub base: f64,
    /// Chaos with all attributes
    pub total: f64,
    /// Chaos after each prefix of a given attribute order
    pub for_increment_attrs: Option<Vec<f64>>,
    /// `total + epsilon * (base - total)`
    pub approx_threshold: Option<f64>,
}

impl Persistable for ChaosScoreStats {}

impl fmt::Display for ChaosScoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChaosScoreStats(base={}, total={}", self.base, self.total)?;
        if let Some(threshold) = self.approx_threshold {
            write!(f, ", approx_threshold={}", threshold)?;
        }
        write!(f, ")")
    }
}

/// Approximation threshold for `epsilon` in `[0, 1]`.
pub fn approx_threshold(base: f64, total: f64, epsilon: f64) -> f64 {
    total + epsilon * (base - total)
}

/// Compute base and total chaos, and optionally the threshold for `epsilon`
/// and the chaos after each prefix of `increment_attrs`.
pub fn compute_chaos_score_stats(
    x: ArrayView2<'_, Code>,
    x_counts: &[usize],
    y: ArrayView1<'_, Code>,
    y_count: usize,
    chaos_fn: ChaosFn,
    epsilon: Option<f64>,
    increment_attrs: Option<&[AttrIndex]>,
) -> Result<ChaosScoreStats> {
    if let Some(epsilon) = epsilon {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(RoughSetError::invalid_parameter("epsilon", epsilon.to_string(), "must be in [0, 1]"));
        }
    }

    let base = GroupIndex::create_uniform(x.nrows()).get_chaos_score(y, y_count, chaos_fn)?;
    let all_attrs: Vec<AttrIndex> = (0..x.ncols()).collect();
    let total = GroupIndex::create_from_data(x, x_counts, &all_attrs)?.get_chaos_score(y, y_count, chaos_fn)?;

    let for_increment_attrs = match increment_attrs {
        Some(attrs) => {
            let mut group_index = GroupIndex::create_uniform(x.nrows());
            let mut scores = Vec::with_capacity(attrs.len());
            for &attr in attrs {
                if attr >= x.ncols() {
                    return Err(RoughSetError::index_out_of_bounds(attr, x.ncols()));
                }
                group_index = group_index.split(x.column(attr), x_counts[attr], true)?;
                scores.push(group_index.get_chaos_score(y, y_count, chaos_fn)?);
            }
            Some(scores)
        }
        None => None,
    };

    Ok(ChaosScoreStats {
        base,
        total,
        for_increment_attrs,
        approx_threshold: epsilon.map(|epsilon| approx_threshold(base, total, epsilon)),
    })
}
