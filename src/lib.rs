//! # skrough-rust
//!
//! Rough-set approximate reducts and bireducts over factorized categorical
//! tables.
//!
//! ## Features
//!
//! - **Partition refinement**: [`GroupIndex`] encodes the equivalence classes
//!   induced by an attribute subset and refines them one column at a time.
//! - **Chaos measures**: entropy, Gini impurity and conflicts count over
//!   class-by-decision distributions.
//! - **Randomization test**: permutation check of whether an attribute beats
//!   shuffled copies of itself (DAAR).
//! - **Hook-driven stages**: grow and shrink loops assembled from small,
//!   typed hooks, reproducible from a seed.
//! - **Parallel ensembles**: independent runs with derived seeds on a Rayon
//!   pool.
//!
//! ## Quick Start
//!
//! ```rust
//! use skrough_rust::{get_approx_reduct_greedy_heuristic, ConfigBuilder, FactorizedData};
//!
//! # fn main() -> skrough_rust::Result<()> {
//! let rows = vec![
//!     vec!["sunny", "hot"],
//!     vec!["sunny", "mild"],
//!     vec!["rainy", "hot"],
//!     vec!["rainy", "mild"],
//! ];
//! let data = FactorizedData::from_records(&rows, &["no", "no", "yes", "yes"])?;
//!
//! let config = ConfigBuilder::new().epsilon(0.0).random_seed(7).build()?;
//! let reducts = get_approx_reduct_greedy_heuristic(&data, &config)?;
//! assert_eq!(reducts[0].attrs, vec![0]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: types, constants, error handling and seeded randomness
//! - [`config`]: run configuration
//! - [`dataset`]: factorized tables and dependency checks
//! - [`measures`]: chaos measures
//! - [`partition`]: the group index
//! - [`selection`]: randomization check and candidate sampling
//! - [`processing`]: state, hooks, stages and multi-stage pipelines
//! - [`structs`]: result value objects
//! - [`algorithms`]: named pipelines and the ensemble runner

#![doc(html_root_url = "https://docs.rs/skrough-rust/")]
#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub,
    non_snake_case,
    non_upper_case_globals
)]

// Core infrastructure module - always available
pub mod core;

// Configuration management module
pub mod config;

// Input tables and dependency checks
pub mod dataset;

// Chaos measures
pub mod measures;

// Partition refinement
pub mod partition;

// Randomization check and sampling
pub mod selection;

// Hook-driven processing
pub mod processing;

// Result value objects
pub mod structs;

// Named assemblies
pub mod algorithms;

// Re-export core functionality for convenience
pub use crate::core::{
    constants::*,
    error::{Result, RoughSetError},
    traits::*,
    types::*,
};

pub use algorithms::{
    get_approx_reduct_daar_heuristic, get_approx_reduct_greedy_heuristic,
    get_bireduct_greedy_heuristic, run_ensemble,
};
pub use config::{Config, ConfigBuilder};
pub use dataset::{
    check_if_approx_reduct, check_if_bireduct, check_if_consistent_table,
    check_if_functional_dependency, check_if_reduct, factorize_column, FactorizedData,
};
pub use measures::{conflicts_count, entropy, gini_impurity, ChaosFn};
pub use partition::GroupIndex;
pub use processing::{ProcessingMultiStage, ProcessingState, Stage};
pub use selection::check_if_attr_better_than_shuffled;
pub use structs::{
    attrs_occurrence_counts, Bireduct, ChaosScoreStats, ObjsAttrsSubset, Reduct,
};

// Version information
pub use crate::core::constants::SKROUGH_RUST_VERSION as VERSION;

/// Initialize logging.
///
/// Installs `env_logger` with an `info` default filter unless `RUST_LOG` is
/// set. Safe to call more than once.
///
/// ```rust
/// skrough_rust::init_logging();
/// ```
pub fn init_logging() {
    crate::core::initialize_logging()
}
