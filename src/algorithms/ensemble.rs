//! Independent repeated runs of one pipeline.

use std::sync::Arc;

use rayon::prelude::*;

use crate::config::Config;
use crate::core::error::Result;
use crate::core::utils::{build_thread_pool, Random};
use crate::dataset::FactorizedData;
use crate::processing::ProcessingMultiStage;

/// Run `pipeline` `config.n_runs` times with seeds derived from
/// `config.random_seed`.
///
/// Runs share config and input. Results come back in run order whatever the
/// scheduling, so the output depends on the seed alone.
pub fn run_ensemble<R: Send>(
    pipeline: &ProcessingMultiStage<R>,
    config: Arc<Config>,
    input: Arc<FactorizedData>,
) -> Result<Vec<R>> {
    config.validate()?;
    let seeds = Random::with_seed(config.random_seed).derive_seeds(config.n_runs);
    log::info!(
        "Running {} run(s) on {} objects x {} attributes",
        seeds.len(),
        input.n_objects(),
        input.n_attrs()
    );

    let num_threads = config.effective_num_threads().min(seeds.len());
    if num_threads <= 1 {
        return seeds
            .iter()
            .map(|&seed| pipeline.run(Arc::clone(&config), Arc::clone(&input), seed))
            .collect();
    }

    let pool = build_thread_pool(num_threads)?;
    pool.install(|| {
        seeds
            .par_iter()
            .map(|&seed| pipeline.run(Arc::clone(&config), Arc::clone(&input), seed))
            .collect()
    })
}
