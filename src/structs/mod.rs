//! Result value objects.

pub mod reduct;
pub mod stats;

pub use reduct::{attrs_occurrence_counts, AttrsSubset, Bireduct, ObjsAttrsSubset, Reduct};
pub use stats::{approx_threshold, compute_chaos_score_stats, ChaosScoreStats};
