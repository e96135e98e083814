//! Approximate reduct heuristics.

use std::sync::Arc;

use crate::algorithms::ensemble::run_ensemble;
use crate::config::Config;
use crate::core::error::Result;
use crate::dataset::FactorizedData;
use crate::processing::hooks::{
    AddFirstAttr, ApproxThresholdReached, ComputeChaosScoreStats, DaarFilter, ElementsEmpty,
    EmptyIterationsMaxCountReached, InitGroupIndex, RandomSubsample, RebuildGroupIndex,
    ReductResult, ReductionCandidates, RemainingAttrs, ResetReductionChecks,
    ResultAttrsMaxCountReached, SelectByChaosScore, TrackEmptyIterations, TryRemoveFirstAttr,
};
use crate::processing::{ProcessingMultiStage, Stage};
use crate::structs::Reduct;

/// Add the best-scoring candidate until the threshold or the size cap is hit.
pub fn greedy_grow_stage() -> Result<Stage> {
    Stage::builder("greedy_grow")
        .stop(ApproxThresholdReached)
        .stop(ResultAttrsMaxCountReached)
        .pre_candidates(RemainingAttrs)
        .candidates(RandomSubsample)
        .select(SelectByChaosScore::new())
        .inner_stop(ElementsEmpty)
        .inner_process(AddFirstAttr)
        .build()
}

/// Add the best-ranked candidate passing the randomization check; stop after
/// too many iterations in a row accept nothing.
pub fn daar_grow_stage() -> Result<Stage> {
    Stage::builder("daar_grow")
        .stop(ApproxThresholdReached)
        .stop(ResultAttrsMaxCountReached)
        .stop(EmptyIterationsMaxCountReached)
        .pre_candidates(RemainingAttrs)
        .candidates(RandomSubsample)
        .select(SelectByChaosScore::ranking_all())
        .filter(DaarFilter)
        .inner_init(TrackEmptyIterations)
        .inner_stop(ElementsEmpty)
        .inner_process(AddFirstAttr)
        .build()
}

/// Try dropping each selected attribute, most recent first.
pub fn reduction_stage() -> Result<Stage> {
    Stage::builder("reduction")
        .init(ResetReductionChecks)
        .pre_candidates(ReductionCandidates)
        .inner_stop(ElementsEmpty)
        .inner_process(TryRemoveFirstAttr)
        .finalize(RebuildGroupIndex)
        .build()
}

/// Greedy grow followed by reduction.
pub fn greedy_reduct_pipeline() -> Result<ProcessingMultiStage<Reduct>> {
    ProcessingMultiStage::builder()
        .init(InitGroupIndex)
        .init(ComputeChaosScoreStats)
        .stage(greedy_grow_stage()?)
        .stage(reduction_stage()?)
        .prepare_result(ReductResult)
        .build()
}

/// DAAR grow, without reduction.
pub fn daar_reduct_pipeline() -> Result<ProcessingMultiStage<Reduct>> {
    ProcessingMultiStage::builder()
        .init(InitGroupIndex)
        .init(ComputeChaosScoreStats)
        .stage(daar_grow_stage()?)
        .prepare_result(ReductResult)
        .build()
}

/// `config.n_runs` approximate reducts from the greedy heuristic.
pub fn get_approx_reduct_greedy_heuristic(data: &FactorizedData, config: &Config) -> Result<Vec<Reduct>> {
    let pipeline = greedy_reduct_pipeline()?;
    run_ensemble(&pipeline, Arc::new(config.clone()), Arc::new(data.clone()))
}

/// `config.n_runs` approximate reducts from the DAAR heuristic.
pub fn get_approx_reduct_daar_heuristic(data: &FactorizedData, config: &Config) -> Result<Vec<Reduct>> {
    let pipeline = daar_reduct_pipeline()?;
    run_ensemble(&pipeline, Arc::new(config.clone()), Arc::new(data.clone()))
}
