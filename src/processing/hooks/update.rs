//! Init and finalize hooks.

use crate::core::error::Result;
use crate::dataset::draw_objects;
use crate::partition::GroupIndex;
use crate::processing::hooks::UpdateStateHook;
use crate::processing::state::ProcessingState;
use crate::structs::compute_chaos_score_stats;

/// Start from the one-group partition.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitGroupIndex;

impl UpdateStateHook for InitGroupIndex {
    fn update(&self, state: &mut ProcessingState) -> Result<()> {
        state.values.group_index = GroupIndex::create_uniform(state.input.n_objects());
        Ok(())
    }
}

/// Compute base and total chaos and the threshold for the configured epsilon.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeChaosScoreStats;

impl UpdateStateHook for ComputeChaosScoreStats {
    fn update(&self, state: &mut ProcessingState) -> Result<()> {
        let input = &state.input;
        let stats = compute_chaos_score_stats(
            input.x(),
            input.x_counts(),
            input.y(),
            input.y_count(),
            state.config.chaos_measure.function(),
            Some(state.config.epsilon),
            None,
        )?;
        log::debug!("Chaos score stats: {}", stats);
        state.values.chaos_score_stats = Some(stats);
        Ok(())
    }
}

/// Recompute the group index from the result attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RebuildGroupIndex;

impl UpdateStateHook for RebuildGroupIndex {
    fn update(&self, state: &mut ProcessingState) -> Result<()> {
        let input = &state.input;
        state.values.group_index =
            GroupIndex::create_from_data(input.x(), input.x_counts(), &state.values.result_attrs)?;
        Ok(())
    }
}

/// Forget which attributes the reduction stage already tried.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResetReductionChecks;

impl UpdateStateHook for ResetReductionChecks {
    fn update(&self, state: &mut ProcessingState) -> Result<()> {
        state.values.reduction_checked_attrs.clear();
        Ok(())
    }
}

/// Start with every object selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitResultObjs;

impl UpdateStateHook for InitResultObjs {
    fn update(&self, state: &mut ProcessingState) -> Result<()> {
        state.values.result_objs = (0..state.input.n_objects()).collect();
        Ok(())
    }
}

/// Keep the objects consistent with one decision drawn per group.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectObjects;

impl UpdateStateHook for SelectObjects {
    fn update(&self, state: &mut ProcessingState) -> Result<()> {
        state.values.result_objs = draw_objects(
            &state.values.group_index,
            state.input.y(),
            state.config.object_selection,
            &mut state.rng,
        )?;
        log::debug!("Selected {} objects", state.values.result_objs.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dataset::FactorizedData;
    use ndarray::array;

    fn state() -> ProcessingState {
        let data = FactorizedData::from_codes_inferred(
            array![[0usize, 1], [0, 0], [1, 1], [1, 0]],
            array![0usize, 1, 1, 1],
        )
        .unwrap();
        ProcessingState::new(Config::default(), data, 3).unwrap()
    }

    #[test]
    fn test_init_hooks() {
        let mut state = state();
        InitGroupIndex.update(&mut state).unwrap();
        assert_eq!(state.values.group_index, GroupIndex::create_uniform(4));
        InitResultObjs.update(&mut state).unwrap();
        assert_eq!(state.values.result_objs, vec![0, 1, 2, 3]);
        ComputeChaosScoreStats.update(&mut state).unwrap();
        assert_eq!(state.approx_threshold().unwrap(), 0.0);
    }

    #[test]
    fn test_rebuild_and_select_objects() {
        let mut state = state();
        state.values.result_attrs = vec![0];
        RebuildGroupIndex.update(&mut state).unwrap();
        assert_eq!(state.values.group_index.index(), &[0, 0, 1, 1]);

        SelectObjects.update(&mut state).unwrap();
        let objs = &state.values.result_objs;
        // group {2, 3} is pure, group {0, 1} keeps one of its decisions
        assert!(objs.contains(&2) && objs.contains(&3));
        assert_eq!(objs.len(), 3);
    }
}
