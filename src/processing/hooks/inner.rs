//! Inner loop hooks.

use crate::core::error::Result;
use crate::core::types::{AttrIndex, Elements};
use crate::partition::GroupIndex;
use crate::processing::hooks::{InnerProcessHook, InnerStopHook};
use crate::processing::state::ProcessingState;

/// Leave the inner loop once the working set is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementsEmpty;

impl InnerStopHook for ElementsEmpty {
    fn should_stop(&self, _state: &ProcessingState, elements: &[usize]) -> Result<bool> {
        Ok(elements.is_empty())
    }
}

/// Add the first element to the result and refine the group index by it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddFirstAttr;

impl InnerProcessHook for AddFirstAttr {
    fn process(&self, state: &mut ProcessingState, mut elements: Elements) -> Result<Elements> {
        if elements.is_empty() {
            return Ok(elements);
        }
        let attr = elements.remove(0);
        let input = &state.input;
        state.values.group_index =
            state
                .values
                .group_index
                .split(input.x().column(attr), input.x_counts()[attr], true)?;
        state.values.result_attrs.push(attr);
        log::debug!(
            "Added attribute {}, result attrs {:?}",
            attr,
            state.values.result_attrs
        );
        Ok(elements)
    }
}

/// Drop the first element from the result if the chaos of the remaining
/// attributes stays within the approximation threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct TryRemoveFirstAttr;

impl InnerProcessHook for TryRemoveFirstAttr {
    fn process(&self, state: &mut ProcessingState, mut elements: Elements) -> Result<Elements> {
        if elements.is_empty() {
            return Ok(elements);
        }
        let attr = elements.remove(0);
        state.values.reduction_checked_attrs.push(attr);

        let threshold = state.approx_threshold()?;
        let remaining: Vec<AttrIndex> = state
            .values
            .result_attrs
            .iter()
            .copied()
            .filter(|&a| a != attr)
            .collect();
        let input = &state.input;
        let score = GroupIndex::create_from_data(input.x(), input.x_counts(), &remaining)?
            .get_chaos_score(input.y(), input.y_count(), state.config.chaos_measure.function())?;

        if score <= threshold {
            log::debug!("Removed attribute {}: chaos {} <= {}", attr, score, threshold);
            state.values.result_attrs = remaining;
        } else {
            log::trace!("Kept attribute {}: chaos {} > {}", attr, score, threshold);
        }
        Ok(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dataset::FactorizedData;
    use crate::processing::hooks::{ComputeChaosScoreStats, InitGroupIndex, UpdateStateHook};
    use ndarray::array;

    // y = x0 xor x1, x2 duplicates x0
    fn state() -> ProcessingState {
        let data = FactorizedData::from_codes_inferred(
            array![[0usize, 0, 0], [0, 1, 0], [1, 0, 1], [1, 1, 1]],
            array![0usize, 1, 1, 0],
        )
        .unwrap();
        let mut state = ProcessingState::new(Config::default(), data, 0).unwrap();
        InitGroupIndex.update(&mut state).unwrap();
        ComputeChaosScoreStats.update(&mut state).unwrap();
        state
    }

    #[test]
    fn test_add_first_attr() {
        let mut state = state();
        let rest = AddFirstAttr.process(&mut state, vec![1, 0]).unwrap();
        assert_eq!(rest, vec![0]);
        assert_eq!(state.values.result_attrs, vec![1]);
        assert_eq!(state.values.group_index.index(), &[0, 1, 0, 1]);
        assert!(!ElementsEmpty.should_stop(&state, &rest).unwrap());
        assert!(ElementsEmpty.should_stop(&state, &[]).unwrap());
    }

    #[test]
    fn test_try_remove_first_attr() {
        let mut state = state();
        state.values.result_attrs = vec![0, 1, 2];
        // x2 is redundant next to x0
        let rest = TryRemoveFirstAttr.process(&mut state, vec![2, 1, 0]).unwrap();
        assert_eq!(state.values.result_attrs, vec![0, 1]);
        let rest = TryRemoveFirstAttr.process(&mut state, rest).unwrap();
        let rest = TryRemoveFirstAttr.process(&mut state, rest).unwrap();
        assert!(rest.is_empty());
        assert_eq!(state.values.result_attrs, vec![0, 1]);
        assert_eq!(state.values.reduction_checked_attrs, vec![2, 1, 0]);
    }
}
