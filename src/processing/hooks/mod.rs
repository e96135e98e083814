//! Hook traits, one per role in a stage, and their canonical implementations.
//!
//! Every hook receives the [`ProcessingState`] of the run. Hooks that narrow
//! the working set take and return [`Elements`]. A stage combines several
//! hooks of the same role:
//!
//! - stop hooks fire when any of them fires
//! - produce hooks concatenate, and break when any of them breaks
//! - process hooks are chained in declaration order

use std::ops::ControlFlow;

use crate::core::error::Result;
use crate::core::types::Elements;
use crate::processing::state::ProcessingState;

pub mod inner;
pub mod process;
pub mod produce;
pub mod result;
pub mod stop;
pub mod update;

pub use inner::{AddFirstAttr, ElementsEmpty, TryRemoveFirstAttr};
pub use process::{DaarFilter, RandomSubsample, SelectByChaosScore, TrackEmptyIterations};
pub use produce::{ReductionCandidates, RemainingAttrs};
pub use result::{BireductResult, ObjsAttrsSubsetResult, ReductResult};
pub use stop::{ApproxThresholdReached, EmptyIterationsMaxCountReached, ResultAttrsMaxCountReached};
pub use update::{
    ComputeChaosScoreStats, InitGroupIndex, InitResultObjs, RebuildGroupIndex,
    ResetReductionChecks, SelectObjects,
};

fn short_type_name<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

/// Decides whether the outer loop of a stage terminates.
pub trait StopHook: Send + Sync {
    /// True to stop the stage
    fn should_stop(&self, state: &ProcessingState) -> Result<bool>;

    /// Name used in logs
    fn name(&self) -> &'static str {
        short_type_name::<Self>()
    }
}

/// Produces the universe searched by one outer iteration.
///
/// `Break` means nothing is left to search; it ends the stage normally.
pub trait ProduceElementsHook: Send + Sync {
    /// Produce this iteration's elements
    fn produce(&self, state: &mut ProcessingState) -> Result<ControlFlow<(), Elements>>;
}

/// Narrows or reorders the working set.
pub trait ProcessElementsHook: Send + Sync {
    /// Process the working set
    fn process(&self, state: &mut ProcessingState, elements: Elements) -> Result<Elements>;
}

/// Decides whether the inner loop of a stage terminates.
pub trait InnerStopHook: Send + Sync {
    /// True to leave the inner loop
    fn should_stop(&self, state: &ProcessingState, elements: &[usize]) -> Result<bool>;
}

/// Consumes elements of the working set; must strictly shrink it.
pub trait InnerProcessHook: Send + Sync {
    /// Consume from the working set and return what remains
    fn process(&self, state: &mut ProcessingState, elements: Elements) -> Result<Elements>;
}

/// Side-effecting setup or teardown.
pub trait UpdateStateHook: Send + Sync {
    /// Update the state
    fn update(&self, state: &mut ProcessingState) -> Result<()>;
}

/// Builds the output of a run from the final state.
pub trait PrepareResult<R>: Send + Sync {
    /// Build the result
    fn prepare(&self, state: &ProcessingState) -> Result<R>;
}

/// First stop hook that fires, if any.
pub(crate) fn first_firing(
    hooks: &[Box<dyn StopHook>],
    state: &ProcessingState,
) -> Result<Option<&'static str>> {
    for hook in hooks {
        if hook.should_stop(state)? {
            return Ok(Some(hook.name()));
        }
    }
    Ok(None)
}

pub(crate) fn produce_all(
    hooks: &[Box<dyn ProduceElementsHook>],
    state: &mut ProcessingState,
) -> Result<ControlFlow<(), Elements>> {
    let mut elements = Elements::new();
    for hook in hooks {
        match hook.produce(state)? {
            ControlFlow::Continue(produced) => elements.extend(produced),
            ControlFlow::Break(()) => return Ok(ControlFlow::Break(())),
        }
    }
    Ok(ControlFlow::Continue(elements))
}

pub(crate) fn chain(
    hooks: &[Box<dyn ProcessElementsHook>],
    state: &mut ProcessingState,
    elements: Elements,
) -> Result<Elements> {
    hooks
        .iter()
        .try_fold(elements, |elements, hook| hook.process(state, elements))
}

pub(crate) fn any_inner_stop(
    hooks: &[Box<dyn InnerStopHook>],
    state: &ProcessingState,
    elements: &[usize],
) -> Result<bool> {
    for hook in hooks {
        if hook.should_stop(state, elements)? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub(crate) fn chain_inner(
    hooks: &[Box<dyn InnerProcessHook>],
    state: &mut ProcessingState,
    elements: Elements,
) -> Result<Elements> {
    hooks
        .iter()
        .try_fold(elements, |elements, hook| hook.process(state, elements))
}

pub(crate) fn update_all(hooks: &[Box<dyn UpdateStateHook>], state: &mut ProcessingState) -> Result<()> {
    hooks.iter().try_for_each(|hook| hook.update(state))
}
