//! Partition-refinement engine.

pub mod group_index;

pub use group_index::GroupIndex;
