//! Named hook assemblies and the ensemble runner.

pub mod bireduct;
pub mod ensemble;
pub mod reduct;

pub use bireduct::{get_bireduct_greedy_heuristic, greedy_bireduct_pipeline};
pub use ensemble::run_ensemble;
pub use reduct::{
    daar_grow_stage, daar_reduct_pipeline, get_approx_reduct_daar_heuristic,
    get_approx_reduct_greedy_heuristic, greedy_grow_stage, greedy_reduct_pipeline, reduction_stage,
};
