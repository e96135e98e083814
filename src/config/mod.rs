//! Configuration management for skrough-rust.
//!
//! A single strongly-typed [`Config`] replaces string-keyed settings. Files
//! in JSON or TOML and `SKROUGH_*` environment variables are supported.

pub mod core;

pub use self::core::{Config, ConfigBuilder};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "skrough.toml";
