//! Input tables and the checks run against them.
//!
//! - [`factorize`]: raw values to dense codes
//! - [`dataset`]: the validated [`FactorizedData`] table
//! - [`dependency`]: functional dependency and (bi)reduct checks
//! - [`objects`]: object selection for bireducts

pub mod dataset;
pub mod dependency;
pub mod factorize;
pub mod objects;

pub use dataset::FactorizedData;
pub use dependency::{
    check_if_approx_reduct, check_if_bireduct, check_if_consistent_table,
    check_if_functional_dependency, check_if_reduct,
};
pub use factorize::factorize_column;
pub use objects::draw_objects;
