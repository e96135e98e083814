//! Hook-driven processing pipeline.
//!
//! A run threads one [`ProcessingState`] through a [`ProcessingMultiStage`]:
//! its init hooks, each [`Stage`] in order, its finalize hooks and finally the
//! result builder. Stages are composed from the hooks in [`hooks`].

pub mod hooks;
pub mod multi_stage;
pub mod stage;
pub mod state;

pub use multi_stage::{MultiStageBuilder, ProcessingMultiStage};
pub use stage::{Stage, StageBuilder};
pub use state::{ProcessingState, Values};
