//! System constants and configuration defaults for skrough-rust.

use crate::core::types::{ChaosMeasure, ObjectSelection};

/// Default disorder measure.
pub const DEFAULT_CHAOS_MEASURE: ChaosMeasure = ChaosMeasure::Entropy;

/// Default approximation level. Zero means the reduct must reach the chaos
/// score of the full attribute set.
pub const DEFAULT_EPSILON: f64 = 0.0;

/// Default number of attributes kept by chaos-score-based selection.
pub const DEFAULT_SELECTED_MAX_COUNT: usize = 1;

/// Default number of consecutive iterations without an accepted attribute
/// after which DAAR stops.
pub const DEFAULT_CONSECUTIVE_EMPTY_ITERATIONS_MAX_COUNT: usize = 1;

/// Default false-positive rate accepted by the randomization check.
pub const DEFAULT_DAAR_ALLOWED_RANDOMNESS: f64 = 0.05;

/// Default number of shuffled probes drawn by the randomization check.
pub const DEFAULT_DAAR_PROBES_COUNT: usize = 100;

/// Default additive smoothing of the randomization score.
pub const DEFAULT_DAAR_SMOOTHING_PARAMETER: f64 = 1.0;

/// Default object policy for bireducts.
pub const DEFAULT_OBJECT_SELECTION: ObjectSelection = ObjectSelection::Consistent;

/// Default number of independent runs per call.
pub const DEFAULT_N_RUNS: usize = 1;

/// Default number of worker threads. 0 means use all available cores.
pub const DEFAULT_NUM_THREADS: usize = 0;

/// Default random seed for reproducibility.
pub const DEFAULT_RANDOM_SEED: u64 = 0;

/// Raw label spaces up to this multiple of the object count are compressed
/// with a dense lookup table instead of a hash map.
pub const DENSE_COMPRESSION_FACTOR: usize = 4;

/// Version information.
pub const SKROUGH_RUST_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod compile_time_assertions {
    use super::*;
    use static_assertions::*;

    const_assert!(DEFAULT_SELECTED_MAX_COUNT >= 1);
    const_assert!(DEFAULT_N_RUNS >= 1);
    const_assert!(DENSE_COMPRESSION_FACTOR >= 1);
}
