//! Outer loop stop conditions.

use crate::core::error::Result;
use crate::processing::hooks::StopHook;
use crate::processing::state::ProcessingState;

/// Current chaos is at or below the approximation threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxThresholdReached;

impl StopHook for ApproxThresholdReached {
    fn should_stop(&self, state: &ProcessingState) -> Result<bool> {
        let threshold = state.approx_threshold()?;
        let score = state.current_chaos_score()?;
        log::trace!("Chaos score {} against threshold {}", score, threshold);
        Ok(score <= threshold)
    }
}

/// As many attributes as `result_attrs_max_count` are selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultAttrsMaxCountReached;

impl StopHook for ResultAttrsMaxCountReached {
    fn should_stop(&self, state: &ProcessingState) -> Result<bool> {
        Ok(state
            .config
            .result_attrs_max_count
            .map_or(false, |max_count| state.values.result_attrs.len() >= max_count))
    }
}

/// `consecutive_empty_iterations_max_count` iterations accepted nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyIterationsMaxCountReached;

impl StopHook for EmptyIterationsMaxCountReached {
    fn should_stop(&self, state: &ProcessingState) -> Result<bool> {
        Ok(state.values.consecutive_empty_iterations_count
            >= state.config.consecutive_empty_iterations_max_count)
    }
}
