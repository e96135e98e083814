//! Mutable context threaded through every hook of a run.

use std::sync::Arc;

use crate::config::Config;
use crate::core::error::{Result, RoughSetError};
use crate::core::types::{AttrIndex, ObjIndex};
use crate::core::utils::Random;
use crate::dataset::FactorizedData;
use crate::measures::ChaosFn;
use crate::partition::GroupIndex;
use crate::structs::ChaosScoreStats;

/// Working memory written by hooks during a run.
#[derive(Debug, Clone, Default)]
pub struct Values {
    /// Partition induced by `result_attrs`
    pub group_index: GroupIndex,
    /// Attributes selected so far, in selection order
    pub result_attrs: Vec<AttrIndex>,
    /// Objects selected so far (bireducts)
    pub result_objs: Vec<ObjIndex>,
    /// Base/total chaos and the approximation threshold
    pub chaos_score_stats: Option<ChaosScoreStats>,
    /// Iterations in a row in which no attribute was accepted
    pub consecutive_empty_iterations_count: usize,
    /// Attributes already tried by the reduction stage
    pub reduction_checked_attrs: Vec<AttrIndex>,
}

/// State of one run: its generator, shared read-only settings and input, and
/// private working values.
#[derive(Debug, Clone)]
pub struct ProcessingState {
    /// Generator consumed by every stochastic hook of this run
    pub rng: Random,
    pub(crate) config: Arc<Config>,
    pub(crate) input: Arc<FactorizedData>,
    /// Working values
    pub values: Values,
}

static_assertions::assert_impl_all!(ProcessingState: Send, Sync, Clone);

impl ProcessingState {
    /// Create a state owning its config and input. The config is validated.
    pub fn new(config: Config, input: FactorizedData, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_shared(Arc::new(config), Arc::new(input), seed))
    }

    /// Create a state over config and input shared with other runs.
    pub fn from_shared(config: Arc<Config>, input: Arc<FactorizedData>, seed: u64) -> Self {
        ProcessingState {
            rng: Random::with_seed(seed),
            config,
            input,
            values: Values::default(),
        }
    }

    /// Fresh state for another run over the same config and input.
    pub fn derive(&self, seed: u64) -> Self {
        Self::from_shared(Arc::clone(&self.config), Arc::clone(&self.input), seed)
    }

    /// Run settings
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Input table
    pub fn input(&self) -> &FactorizedData {
        &self.input
    }

    /// Chaos measure selected by the config
    pub fn chaos_fn(&self) -> ChaosFn {
        self.config.chaos_measure.function()
    }

    /// Threshold computed by the chaos score stats hook.
    pub fn approx_threshold(&self) -> Result<f64> {
        self.values
            .chaos_score_stats
            .as_ref()
            .and_then(|stats| stats.approx_threshold)
            .ok_or_else(|| RoughSetError::internal("approximation threshold is not computed"))
    }

    /// Chaos of the decision under the current group index.
    pub fn current_chaos_score(&self) -> Result<f64> {
        self.values
            .group_index
            .get_chaos_score(self.input.y(), self.input.y_count(), self.chaos_fn())
    }
}
