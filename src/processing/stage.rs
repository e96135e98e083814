//! One grow or shrink phase, driven by hooks.
//!
//! A stage runs its init hooks, checks the stop hooks, then loops: produce the
//! pre-candidates, narrow them through the candidate, select and filter hooks,
//! run the inner-init hooks, and consume the working set in an inner loop. The
//! stop hooks are checked after every inner step and again after the inner
//! loop ends. Any stop, or exhausted pre-candidates, ends the loops; the
//! finalize hooks then always run.

use std::ops::ControlFlow;

use crate::core::error::{Result, RoughSetError};
use crate::processing::hooks::{
    any_inner_stop, chain, chain_inner, first_firing, produce_all, update_all, InnerProcessHook,
    InnerStopHook, ProcessElementsHook, ProduceElementsHook, StopHook, UpdateStateHook,
};
use crate::processing::state::ProcessingState;

/// A processing phase assembled from hooks.
pub struct Stage {
    name: String,
    init_hooks: Vec<Box<dyn UpdateStateHook>>,
    stop_hooks: Vec<Box<dyn StopHook>>,
    pre_candidates_hooks: Vec<Box<dyn ProduceElementsHook>>,
    candidates_hooks: Vec<Box<dyn ProcessElementsHook>>,
    select_hooks: Vec<Box<dyn ProcessElementsHook>>,
    filter_hooks: Vec<Box<dyn ProcessElementsHook>>,
    inner_init_hooks: Vec<Box<dyn ProcessElementsHook>>,
    inner_stop_hooks: Vec<Box<dyn InnerStopHook>>,
    inner_process_hooks: Vec<Box<dyn InnerProcessHook>>,
    finalize_hooks: Vec<Box<dyn UpdateStateHook>>,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("name", &self.name)
            .field("stop_hooks", &self.stop_hooks.len())
            .field("pre_candidates_hooks", &self.pre_candidates_hooks.len())
            .field("inner_process_hooks", &self.inner_process_hooks.len())
            .finish()
    }
}

impl Stage {
    /// Start building a stage.
    pub fn builder(name: impl Into<String>) -> StageBuilder {
        StageBuilder::new(name)
    }

    /// Stage name used in logs
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the stage on `state`.
    pub fn run(&self, state: &mut ProcessingState) -> Result<()> {
        log::debug!("Stage '{}': init", self.name);
        update_all(&self.init_hooks, state)?;

        if let ControlFlow::Break(reason) = self.run_loops(state)? {
            log::debug!("Stage '{}': loop break ({})", self.name, reason);
        }

        log::debug!("Stage '{}': finalize", self.name);
        update_all(&self.finalize_hooks, state)
    }

    fn check_stop(&self, state: &ProcessingState) -> Result<ControlFlow<&'static str>> {
        Ok(match first_firing(&self.stop_hooks, state)? {
            Some(name) => ControlFlow::Break(name),
            None => ControlFlow::Continue(()),
        })
    }

    fn run_loops(&self, state: &mut ProcessingState) -> Result<ControlFlow<&'static str>> {
        if let ControlFlow::Break(reason) = self.check_stop(state)? {
            return Ok(ControlFlow::Break(reason));
        }

        loop {
            let elements = match produce_all(&self.pre_candidates_hooks, state)? {
                ControlFlow::Continue(elements) => elements,
                ControlFlow::Break(()) => return Ok(ControlFlow::Break("pre-candidates exhausted")),
            };
            let elements = chain(&self.candidates_hooks, state, elements)?;
            let elements = chain(&self.select_hooks, state, elements)?;
            let elements = chain(&self.filter_hooks, state, elements)?;
            let mut elements = chain(&self.inner_init_hooks, state, elements)?;
            log::trace!("Stage '{}': working set {:?}", self.name, elements);

            if !self.inner_process_hooks.is_empty() {
                while !any_inner_stop(&self.inner_stop_hooks, state, &elements)? {
                    let before = elements.len();
                    elements = chain_inner(&self.inner_process_hooks, state, elements)?;
                    if elements.len() >= before {
                        return Err(RoughSetError::internal(format!(
                            "stage '{}': inner process did not shrink the working set ({} -> {})",
                            self.name,
                            before,
                            elements.len()
                        )));
                    }
                    if let ControlFlow::Break(reason) = self.check_stop(state)? {
                        return Ok(ControlFlow::Break(reason));
                    }
                }
            }

            if let ControlFlow::Break(reason) = self.check_stop(state)? {
                return Ok(ControlFlow::Break(reason));
            }
        }
    }
}

/// Builder for [`Stage`].
#[derive(Debug)]
pub struct StageBuilder {
    stage: Stage,
}

impl StageBuilder {
    /// Create an empty stage named `name`
    pub fn new(name: impl Into<String>) -> Self {
        StageBuilder {
            stage: Stage {
                name: name.into(),
                init_hooks: Vec::new(),
                stop_hooks: Vec::new(),
                pre_candidates_hooks: Vec::new(),
                candidates_hooks: Vec::new(),
                select_hooks: Vec::new(),
                filter_hooks: Vec::new(),
                inner_init_hooks: Vec::new(),
                inner_stop_hooks: Vec::new(),
                inner_process_hooks: Vec::new(),
                finalize_hooks: Vec::new(),
            },
        }
    }

    /// Add an init hook
    pub fn init(mut self, hook: impl UpdateStateHook + 'static) -> Self {
        self.stage.init_hooks.push(Box::new(hook));
        self
    }

    /// Add a stop hook
    pub fn stop(mut self, hook: impl StopHook + 'static) -> Self {
        self.stage.stop_hooks.push(Box::new(hook));
        self
    }

    /// Add a pre-candidates producer
    pub fn pre_candidates(mut self, hook: impl ProduceElementsHook + 'static) -> Self {
        self.stage.pre_candidates_hooks.push(Box::new(hook));
        self
    }

    /// Add a candidates hook
    pub fn candidates(mut self, hook: impl ProcessElementsHook + 'static) -> Self {
        self.stage.candidates_hooks.push(Box::new(hook));
        self
    }

    /// Add a select hook
    pub fn select(mut self, hook: impl ProcessElementsHook + 'static) -> Self {
        self.stage.select_hooks.push(Box::new(hook));
        self
    }

    /// Add a filter hook
    pub fn filter(mut self, hook: impl ProcessElementsHook + 'static) -> Self {
        self.stage.filter_hooks.push(Box::new(hook));
        self
    }

    /// Add an inner-init hook
    pub fn inner_init(mut self, hook: impl ProcessElementsHook + 'static) -> Self {
        self.stage.inner_init_hooks.push(Box::new(hook));
        self
    }

    /// Add an inner stop hook
    pub fn inner_stop(mut self, hook: impl InnerStopHook + 'static) -> Self {
        self.stage.inner_stop_hooks.push(Box::new(hook));
        self
    }

    /// Add an inner process hook
    pub fn inner_process(mut self, hook: impl InnerProcessHook + 'static) -> Self {
        self.stage.inner_process_hooks.push(Box::new(hook));
        self
    }

    /// Add a finalize hook
    pub fn finalize(mut self, hook: impl UpdateStateHook + 'static) -> Self {
        self.stage.finalize_hooks.push(Box::new(hook));
        self
    }

    /// Build the stage.
    ///
    /// A stage with inner process hooks needs an inner stop hook, and a stage
    /// that loops needs a pre-candidates producer.
    pub fn build(self) -> Result<Stage> {
        let stage = self.stage;
        crate::ensure!(
            stage.inner_process_hooks.is_empty() || !stage.inner_stop_hooks.is_empty(),
            crate::config_error!(
                "stage '{}' has inner process hooks but no inner stop hook",
                stage.name
            )
        );
        crate::ensure!(
            !stage.pre_candidates_hooks.is_empty() || !stage.stop_hooks.is_empty(),
            crate::config_error!(
                "stage '{}' needs a pre-candidates or a stop hook to terminate",
                stage.name
            )
        );
        Ok(stage)
    }
}
