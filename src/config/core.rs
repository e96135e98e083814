//! Core configuration structure and builder for skrough-rust.
//!
//! [`Config`] carries every knob consumed by the processing hooks. It is
//! read-only for the duration of a run and shared between ensemble workers.

use crate::config::DEFAULT_CONFIG_FILE;
use crate::core::constants::*;
use crate::core::error::{Result, RoughSetError};
use crate::core::types::*;
use crate::core::utils::effective_num_threads;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for reduct and bireduct searches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Disorder measure used for every score
    pub chaos_measure: ChaosMeasure,
    /// Share of the base-to-total chaos gap the result may leave, in `[0, 1]`
    pub epsilon: f64,
    /// Cap on candidates drawn per iteration (`None` keeps all, in order)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates_max_count: Option<usize>,
    /// Attributes kept by the select step of each iteration
    pub selected_max_count: usize,
    /// Stop once this many attributes are selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_attrs_max_count: Option<usize>,
    /// Consecutive iterations without a passing attribute before DAAR stops
    pub consecutive_empty_iterations_max_count: usize,
    /// Acceptable false-positive rate of the randomization check
    pub daar_allowed_randomness: f64,
    /// Shuffled probes per randomization check
    pub daar_probes_count: usize,
    /// Smoothing added to the randomization probe score
    pub daar_smoothing_parameter: f64,
    /// Objects kept when a bireduct is finalized
    pub object_selection: ObjectSelection,

    // Run settings
    /// Independent results to compute
    pub n_runs: usize,
    /// Seed of the parent generator
    pub random_seed: u64,
    /// Worker threads for ensemble runs (0 = all cores)
    pub num_threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            chaos_measure: DEFAULT_CHAOS_MEASURE,
            epsilon: DEFAULT_EPSILON,
            candidates_max_count: None,
            selected_max_count: DEFAULT_SELECTED_MAX_COUNT,
            result_attrs_max_count: None,
            consecutive_empty_iterations_max_count: DEFAULT_CONSECUTIVE_EMPTY_ITERATIONS_MAX_COUNT,
            daar_allowed_randomness: DEFAULT_DAAR_ALLOWED_RANDOMNESS,
            daar_probes_count: DEFAULT_DAAR_PROBES_COUNT,
            daar_smoothing_parameter: DEFAULT_DAAR_SMOOTHING_PARAMETER,
            object_selection: DEFAULT_OBJECT_SELECTION,
            n_runs: DEFAULT_N_RUNS,
            random_seed: DEFAULT_RANDOM_SEED,
            num_threads: DEFAULT_NUM_THREADS,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(RoughSetError::invalid_parameter(
                "epsilon",
                self.epsilon.to_string(),
                "must be in range [0.0, 1.0]",
            ));
        }

        if self.candidates_max_count == Some(0) {
            return Err(RoughSetError::invalid_parameter(
                "candidates_max_count",
                "0",
                "must be at least 1 when set",
            ));
        }

        if self.selected_max_count == 0 {
            return Err(RoughSetError::invalid_parameter(
                "selected_max_count",
                "0",
                "must be at least 1",
            ));
        }

        if self.consecutive_empty_iterations_max_count == 0 {
            return Err(RoughSetError::invalid_parameter(
                "consecutive_empty_iterations_max_count",
                "0",
                "must be at least 1",
            ));
        }

        if !(0.0..=1.0).contains(&self.daar_allowed_randomness) {
            return Err(RoughSetError::invalid_parameter(
                "daar_allowed_randomness",
                self.daar_allowed_randomness.to_string(),
                "must be in range [0.0, 1.0]",
            ));
        }

        if !self.daar_smoothing_parameter.is_finite() || self.daar_smoothing_parameter <= 0.0 {
            return Err(RoughSetError::invalid_parameter(
                "daar_smoothing_parameter",
                self.daar_smoothing_parameter.to_string(),
                "must be positive and finite",
            ));
        }

        if self.n_runs == 0 {
            return Err(RoughSetError::invalid_parameter("n_runs", "0", "must be at least 1"));
        }

        Ok(())
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| RoughSetError::config(format!("Failed to read config file: {}", e)))?;

        let config: Config = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| RoughSetError::config(format!("Failed to parse JSON config: {}", e)))?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| RoughSetError::config(format!("Failed to parse TOML config: {}", e)))?,
            _ => {
                return Err(RoughSetError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load `dir/skrough.toml`, or the defaults when that file does not exist
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            log::debug!("Loading configuration from {}", path.display());
            Self::load_from_file(path)
        } else {
            log::debug!("No {} in {}, using defaults", DEFAULT_CONFIG_FILE, dir.as_ref().display());
            Ok(Self::default())
        }
    }

    /// Save configuration to a `.json` or `.toml` file
    ///
    /// TOML integers are signed, so `.toml` files require `random_seed <= i64::MAX`.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)
                .map_err(|e| RoughSetError::serialization(format!("Failed to serialize to JSON: {}", e)))?,
            Some("toml") => {
                if i64::try_from(self.random_seed).is_err() {
                    return Err(RoughSetError::invalid_parameter(
                        "random_seed",
                        self.random_seed.to_string(),
                        "TOML files hold seeds up to i64::MAX, use .json instead",
                    ));
                }
                toml::to_string_pretty(self)
                    .map_err(|e| RoughSetError::serialization(format!("Failed to serialize to TOML: {}", e)))?
            }
            _ => {
                return Err(RoughSetError::config(
                    "Unsupported config file format. Use .json or .toml",
                ))
            }
        };

        std::fs::write(path, content)
            .map_err(|e| RoughSetError::config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Load configuration from `SKROUGH_*` environment variables
    pub fn load_from_environment() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(val) = std::env::var("SKROUGH_CHAOS_MEASURE") {
            config.chaos_measure = val.parse()?;
        }
        if let Ok(val) = std::env::var("SKROUGH_EPSILON") {
            config.epsilon = parse_env("SKROUGH_EPSILON", &val)?;
        }
        if let Ok(val) = std::env::var("SKROUGH_CANDIDATES_MAX_COUNT") {
            config.candidates_max_count = Some(parse_env("SKROUGH_CANDIDATES_MAX_COUNT", &val)?);
        }
        if let Ok(val) = std::env::var("SKROUGH_RESULT_ATTRS_MAX_COUNT") {
            config.result_attrs_max_count = Some(parse_env("SKROUGH_RESULT_ATTRS_MAX_COUNT", &val)?);
        }
        if let Ok(val) = std::env::var("SKROUGH_DAAR_PROBES_COUNT") {
            config.daar_probes_count = parse_env("SKROUGH_DAAR_PROBES_COUNT", &val)?;
        }
        if let Ok(val) = std::env::var("SKROUGH_DAAR_ALLOWED_RANDOMNESS") {
            config.daar_allowed_randomness = parse_env("SKROUGH_DAAR_ALLOWED_RANDOMNESS", &val)?;
        }
        if let Ok(val) = std::env::var("SKROUGH_N_RUNS") {
            config.n_runs = parse_env("SKROUGH_N_RUNS", &val)?;
        }
        if let Ok(val) = std::env::var("SKROUGH_NUM_THREADS") {
            config.num_threads = parse_env("SKROUGH_NUM_THREADS", &val)?;
        }
        if let Ok(val) = std::env::var("SKROUGH_RANDOM_SEED") {
            config.random_seed = parse_env("SKROUGH_RANDOM_SEED", &val)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Merge this configuration with another configuration (other takes precedence)
    pub fn merge(&mut self, other: &Config) -> Result<()> {
        self.chaos_measure = other.chaos_measure;
        self.epsilon = other.epsilon;
        self.candidates_max_count = other.candidates_max_count;
        self.selected_max_count = other.selected_max_count;
        self.result_attrs_max_count = other.result_attrs_max_count;
        self.consecutive_empty_iterations_max_count = other.consecutive_empty_iterations_max_count;
        self.daar_allowed_randomness = other.daar_allowed_randomness;
        self.daar_probes_count = other.daar_probes_count;
        self.daar_smoothing_parameter = other.daar_smoothing_parameter;
        self.object_selection = other.object_selection;
        self.n_runs = other.n_runs;
        self.random_seed = other.random_seed;
        self.num_threads = other.num_threads;

        self.validate()
    }

    /// Number of worker threads to use
    pub fn effective_num_threads(&self) -> usize {
        effective_num_threads(self.num_threads)
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| RoughSetError::config(format!("Invalid {}: {}", name, value)))
}

/// Configuration builder for fluent configuration creation
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
    validation_errors: Vec<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        ConfigBuilder {
            config: Config::default(),
            validation_errors: Vec::new(),
        }
    }

    /// Set the chaos measure
    pub fn chaos_measure(mut self, measure: ChaosMeasure) -> Self {
        self.config.chaos_measure = measure;
        self
    }

    /// Set the approximation tolerance
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        if !(0.0..=1.0).contains(&epsilon) {
            self.validation_errors
                .push("epsilon must be in range [0.0, 1.0]".to_string());
        }
        self.config.epsilon = epsilon;
        self
    }

    /// Cap the candidates drawn per iteration
    pub fn candidates_max_count(mut self, count: Option<usize>) -> Self {
        if count == Some(0) {
            self.validation_errors
                .push("candidates_max_count must be at least 1".to_string());
        }
        self.config.candidates_max_count = count;
        self
    }

    /// Set the attributes kept per select step
    pub fn selected_max_count(mut self, count: usize) -> Self {
        if count == 0 {
            self.validation_errors
                .push("selected_max_count must be at least 1".to_string());
        }
        self.config.selected_max_count = count;
        self
    }

    /// Cap the result size
    pub fn result_attrs_max_count(mut self, count: Option<usize>) -> Self {
        self.config.result_attrs_max_count = count;
        self
    }

    /// Set the empty iterations tolerated by DAAR
    pub fn consecutive_empty_iterations_max_count(mut self, count: usize) -> Self {
        if count == 0 {
            self.validation_errors
                .push("consecutive_empty_iterations_max_count must be at least 1".to_string());
        }
        self.config.consecutive_empty_iterations_max_count = count;
        self
    }

    /// Set the randomization check false-positive rate
    pub fn daar_allowed_randomness(mut self, allowed: f64) -> Self {
        if !(0.0..=1.0).contains(&allowed) {
            self.validation_errors
                .push("daar_allowed_randomness must be in range [0.0, 1.0]".to_string());
        }
        self.config.daar_allowed_randomness = allowed;
        self
    }

    /// Set the shuffled probes per check
    pub fn daar_probes_count(mut self, probes: usize) -> Self {
        self.config.daar_probes_count = probes;
        self
    }

    /// Set the probe score smoothing
    pub fn daar_smoothing_parameter(mut self, smoothing: f64) -> Self {
        if !smoothing.is_finite() || smoothing <= 0.0 {
            self.validation_errors
                .push("daar_smoothing_parameter must be positive and finite".to_string());
        }
        self.config.daar_smoothing_parameter = smoothing;
        self
    }

    /// Set the bireduct object policy
    pub fn object_selection(mut self, policy: ObjectSelection) -> Self {
        self.config.object_selection = policy;
        self
    }

    /// Set the number of independent results
    pub fn n_runs(mut self, runs: usize) -> Self {
        if runs == 0 {
            self.validation_errors.push("n_runs must be at least 1".to_string());
        }
        self.config.n_runs = runs;
        self
    }

    /// Set the random seed
    pub fn random_seed(mut self, seed: u64) -> Self {
        self.config.random_seed = seed;
        self
    }

    /// Set the number of threads
    pub fn num_threads(mut self, threads: usize) -> Self {
        self.config.num_threads = threads;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        if !self.validation_errors.is_empty() {
            return Err(RoughSetError::config(format!(
                "Configuration validation failed: {}",
                self.validation_errors.join(", ")
            )));
        }

        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
