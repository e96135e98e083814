//! Candidate, select, filter and inner-init hooks.

use crate::core::error::Result;
use crate::core::types::Elements;
use crate::processing::hooks::ProcessElementsHook;
use crate::processing::state::ProcessingState;
use crate::selection::{check_if_attr_better_than_shuffled, sample_candidates, stable_order_by_score};

/// Random subset of at most `candidates_max_count` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSubsample;

impl ProcessElementsHook for RandomSubsample {
    fn process(&self, state: &mut ProcessingState, elements: Elements) -> Result<Elements> {
        Ok(sample_candidates(
            &elements,
            state.config.candidates_max_count,
            &mut state.rng,
        ))
    }
}

/// Attributes ranked by chaos after being added; ties keep input order.
///
/// Keeps the first `selected_max_count`, or the whole ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectByChaosScore {
    keep_all: bool,
}

impl SelectByChaosScore {
    /// Keep the best `selected_max_count` attributes.
    pub fn new() -> Self {
        SelectByChaosScore { keep_all: false }
    }

    /// Keep every attribute, best first.
    pub fn ranking_all() -> Self {
        SelectByChaosScore { keep_all: true }
    }
}

impl ProcessElementsHook for SelectByChaosScore {
    fn process(&self, state: &mut ProcessingState, elements: Elements) -> Result<Elements> {
        let input = &state.input;
        let chaos_fn = state.config.chaos_measure.function();
        let scores = elements
            .iter()
            .map(|&attr| {
                state.values.group_index.get_chaos_score_after_split(
                    input.x().column(attr),
                    input.x_counts()[attr],
                    input.y(),
                    input.y_count(),
                    chaos_fn,
                )
            })
            .collect::<Result<Vec<f64>>>()?;

        let mut ranked = stable_order_by_score(&elements, &scores);
        if !self.keep_all {
            ranked.truncate(state.config.selected_max_count);
        }
        log::trace!("Candidates {:?} scored {:?}, kept {:?}", elements, scores, ranked);
        Ok(ranked)
    }
}

/// Keep the first attribute passing the randomization check, drop the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct DaarFilter;

impl ProcessElementsHook for DaarFilter {
    fn process(&self, state: &mut ProcessingState, elements: Elements) -> Result<Elements> {
        let input = &state.input;
        let config = &state.config;
        let chaos_fn = config.chaos_measure.function();
        for &attr in &elements {
            let passed = check_if_attr_better_than_shuffled(
                &state.values.group_index,
                input.x().column(attr),
                input.x_counts()[attr],
                input.y(),
                input.y_count(),
                config.daar_probes_count,
                config.daar_allowed_randomness,
                chaos_fn,
                &mut state.rng,
                config.daar_smoothing_parameter,
            )?;
            if passed {
                log::debug!("Attribute {} passed the randomization check", attr);
                return Ok(vec![attr]);
            }
        }
        log::debug!("No attribute passed the randomization check");
        Ok(Elements::new())
    }
}

/// Count iterations in a row whose working set came out empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackEmptyIterations;

impl ProcessElementsHook for TrackEmptyIterations {
    fn process(&self, state: &mut ProcessingState, elements: Elements) -> Result<Elements> {
        if elements.is_empty() {
            state.values.consecutive_empty_iterations_count += 1;
        } else {
            state.values.consecutive_empty_iterations_count = 0;
        }
        Ok(elements)
    }
}
