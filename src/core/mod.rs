//! Core infrastructure module for skrough-rust.
//!
//! This module provides the foundational components shared by the rest of
//! the crate:
//!
//! - [`types`]: code, index and enumeration types
//! - [`constants`]: configuration defaults
//! - [`error`]: the crate error type
//! - [`traits`]: persistence of result value objects
//! - [`utils`]: seeded randomness and worker pools
//!
//! ```rust
//! use skrough_rust::core::{
//!     types::{ChaosMeasure, Code},
//!     constants::DEFAULT_EPSILON,
//!     error::{Result, RoughSetError},
//!     utils::Random,
//! };
//!
//! let mut rng = Random::with_seed(7);
//! let order = rng.permutation(4);
//! assert_eq!(order.len(), 4);
//! assert_eq!(ChaosMeasure::default(), ChaosMeasure::Entropy);
//! # let _: Code = 0;
//! # let _ = DEFAULT_EPSILON;
//! # let _: Result<()> = Err(RoughSetError::config("unused"));
//! ```

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
pub mod utils;

pub use constants::*;
pub use error::{Result, RoughSetError};
pub use traits::*;
pub use types::*;

/// Initialize the `env_logger` backend.
///
/// Defaults the filter to `info` when `RUST_LOG` is unset. Calling this more
/// than once is harmless.
pub fn initialize_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_ok() {
        log::debug!("Logging initialized, skrough-rust {}", SKROUGH_RUST_VERSION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_logging_is_idempotent() {
        initialize_logging();
        initialize_logging();
    }

    #[test]
    fn test_module_reexports() {
        let _error: RoughSetError = RoughSetError::config("test");
        let _code: Code = 42;
        let _measure = DEFAULT_CHAOS_MEASURE;
    }
}
