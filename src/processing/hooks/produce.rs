//! Pre-candidate producers.

use std::ops::ControlFlow;

use crate::core::error::Result;
use crate::core::types::Elements;
use crate::processing::hooks::ProduceElementsHook;
use crate::processing::state::ProcessingState;

/// Attributes not selected yet, in index order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemainingAttrs;

impl ProduceElementsHook for RemainingAttrs {
    fn produce(&self, state: &mut ProcessingState) -> Result<ControlFlow<(), Elements>> {
        let selected = &state.values.result_attrs;
        let remaining: Elements = (0..state.input.n_attrs())
            .filter(|attr| !selected.contains(attr))
            .collect();
        if remaining.is_empty() {
            log::debug!("No attributes left to add");
            return Ok(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(remaining))
    }
}

/// Selected attributes not yet tried for removal, most recent first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReductionCandidates;

impl ProduceElementsHook for ReductionCandidates {
    fn produce(&self, state: &mut ProcessingState) -> Result<ControlFlow<(), Elements>> {
        let checked = &state.values.reduction_checked_attrs;
        let candidates: Elements = state
            .values
            .result_attrs
            .iter()
            .rev()
            .filter(|attr| !checked.contains(attr))
            .copied()
            .collect();
        if candidates.is_empty() {
            return Ok(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dataset::FactorizedData;
    use ndarray::array;

    fn state() -> ProcessingState {
        let data = FactorizedData::from_codes_inferred(array![[0usize, 1, 0], [1, 0, 1]], array![0usize, 1])
            .unwrap();
        ProcessingState::new(Config::default(), data, 0).unwrap()
    }

    #[test]
    fn test_remaining_attrs() {
        let mut state = state();
        state.values.result_attrs = vec![1];
        assert_eq!(RemainingAttrs.produce(&mut state).unwrap(), ControlFlow::Continue(vec![0, 2]));
        state.values.result_attrs = vec![1, 0, 2];
        assert_eq!(RemainingAttrs.produce(&mut state).unwrap(), ControlFlow::Break(()));
    }

    #[test]
    fn test_reduction_candidates_newest_first() {
        let mut state = state();
        state.values.result_attrs = vec![2, 0, 1];
        state.values.reduction_checked_attrs = vec![0];
        assert_eq!(
            ReductionCandidates.produce(&mut state).unwrap(),
            ControlFlow::Continue(vec![1, 2])
        );
        state.values.reduction_checked_attrs = vec![0, 1, 2];
        assert_eq!(ReductionCandidates.produce(&mut state).unwrap(), ControlFlow::Break(()));
    }
}
