//! Sequencing of stages into a complete run.

use std::sync::Arc;

use crate::config::Config;
use crate::core::error::{Result, RoughSetError};
use crate::dataset::FactorizedData;
use crate::processing::hooks::{update_all, PrepareResult, UpdateStateHook};
use crate::processing::stage::Stage;
use crate::processing::state::ProcessingState;

/// Init hooks, stages in order, finalize hooks, then result preparation.
pub struct ProcessingMultiStage<R> {
    init_hooks: Vec<Box<dyn UpdateStateHook>>,
    stages: Vec<Stage>,
    finalize_hooks: Vec<Box<dyn UpdateStateHook>>,
    prepare_result: Box<dyn PrepareResult<R>>,
}

impl<R> std::fmt::Debug for ProcessingMultiStage<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessingMultiStage")
            .field("init_hooks", &self.init_hooks.len())
            .field("stages", &self.stages)
            .field("finalize_hooks", &self.finalize_hooks.len())
            .finish()
    }
}

impl<R> ProcessingMultiStage<R> {
    /// Start building a pipeline.
    pub fn builder() -> MultiStageBuilder<R> {
        MultiStageBuilder::new()
    }

    /// Run on a fresh state seeded with `seed`.
    pub fn run(&self, config: Arc<Config>, input: Arc<FactorizedData>, seed: u64) -> Result<R> {
        let mut state = ProcessingState::from_shared(config, input, seed);
        self.run_with_state(&mut state)
    }

    /// Run on a caller-prepared state.
    pub fn run_with_state(&self, state: &mut ProcessingState) -> Result<R> {
        update_all(&self.init_hooks, state)?;
        for stage in &self.stages {
            stage.run(state)?;
        }
        update_all(&self.finalize_hooks, state)?;
        self.prepare_result.prepare(state)
    }
}

/// Builder for [`ProcessingMultiStage`].
pub struct MultiStageBuilder<R> {
    init_hooks: Vec<Box<dyn UpdateStateHook>>,
    stages: Vec<Stage>,
    finalize_hooks: Vec<Box<dyn UpdateStateHook>>,
    prepare_result: Option<Box<dyn PrepareResult<R>>>,
}

impl<R> MultiStageBuilder<R> {
    /// Create an empty builder
    pub fn new() -> Self {
        MultiStageBuilder {
            init_hooks: Vec::new(),
            stages: Vec::new(),
            finalize_hooks: Vec::new(),
            prepare_result: None,
        }
    }

    /// Add an init hook
    pub fn init(mut self, hook: impl UpdateStateHook + 'static) -> Self {
        self.init_hooks.push(Box::new(hook));
        self
    }

    /// Append a stage
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Add a finalize hook
    pub fn finalize(mut self, hook: impl UpdateStateHook + 'static) -> Self {
        self.finalize_hooks.push(Box::new(hook));
        self
    }

    /// Set the result builder
    pub fn prepare_result(mut self, hook: impl PrepareResult<R> + 'static) -> Self {
        self.prepare_result = Some(Box::new(hook));
        self
    }

    /// Build the pipeline; a result builder is required.
    pub fn build(self) -> Result<ProcessingMultiStage<R>> {
        let prepare_result = self
            .prepare_result
            .ok_or_else(|| RoughSetError::config("processing pipeline has no prepare-result hook"))?;
        Ok(ProcessingMultiStage {
            init_hooks: self.init_hooks,
            stages: self.stages,
            finalize_hooks: self.finalize_hooks,
            prepare_result,
        })
    }
}

impl<R> std::fmt::Debug for MultiStageBuilder<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiStageBuilder")
            .field("stages", &self.stages)
            .field("has_prepare_result", &self.prepare_result.is_some())
            .finish()
    }
}

impl<R> Default for MultiStageBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::hooks::{
        AddFirstAttr, ElementsEmpty, InitGroupIndex, ReductResult, RemainingAttrs,
    };
    use crate::structs::Reduct;
    use ndarray::array;

    fn input() -> Arc<FactorizedData> {
        Arc::new(
            FactorizedData::from_codes_inferred(array![[0usize, 1], [1, 0]], array![0usize, 1])
                .unwrap(),
        )
    }

    #[test]
    fn test_missing_prepare_result() {
        assert!(ProcessingMultiStage::<Reduct>::builder().build().is_err());
    }

    #[test]
    fn test_run_and_run_with_state_agree() {
        let pipeline: ProcessingMultiStage<Reduct> = ProcessingMultiStage::builder()
            .init(InitGroupIndex)
            .stage(
                Stage::builder("all")
                    .pre_candidates(RemainingAttrs)
                    .inner_stop(ElementsEmpty)
                    .inner_process(AddFirstAttr)
                    .build()
                    .unwrap(),
            )
            .prepare_result(ReductResult)
            .build()
            .unwrap();
        let config = Arc::new(Config::default());
        let fresh = pipeline.run(Arc::clone(&config), input(), 5).unwrap();
        let mut state = ProcessingState::from_shared(config, input(), 5);
        let prepared = pipeline.run_with_state(&mut state).unwrap();
        assert_eq!(fresh, prepared);
        assert_eq!(fresh.attrs, vec![0, 1]);
    }
}
