//! Statistical checks and sampling shared by the candidate hooks.

pub mod randomization;
pub mod sampling;

pub use randomization::check_if_attr_better_than_shuffled;
pub use sampling::{sample_candidates, stable_order_by_score};
