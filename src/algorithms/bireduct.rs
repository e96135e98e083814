//! Bireduct heuristics.

use std::sync::Arc;

use crate::algorithms::ensemble::run_ensemble;
use crate::algorithms::reduct::{greedy_grow_stage, reduction_stage};
use crate::config::Config;
use crate::core::error::Result;
use crate::dataset::FactorizedData;
use crate::processing::hooks::{
    BireductResult, ComputeChaosScoreStats, InitGroupIndex, InitResultObjs, SelectObjects,
};
use crate::processing::ProcessingMultiStage;
use crate::structs::Bireduct;

/// Greedy grow and reduction on attributes, then object selection.
pub fn greedy_bireduct_pipeline() -> Result<ProcessingMultiStage<Bireduct>> {
    ProcessingMultiStage::builder()
        .init(InitGroupIndex)
        .init(ComputeChaosScoreStats)
        .init(InitResultObjs)
        .stage(greedy_grow_stage()?)
        .stage(reduction_stage()?)
        .finalize(SelectObjects)
        .prepare_result(BireductResult)
        .build()
}

/// `config.n_runs` bireducts from the greedy heuristic.
pub fn get_bireduct_greedy_heuristic(data: &FactorizedData, config: &Config) -> Result<Vec<Bireduct>> {
    let pipeline = greedy_bireduct_pipeline()?;
    run_ensemble(&pipeline, Arc::new(config.clone()), Arc::new(data.clone()))
}
