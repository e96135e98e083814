//! Error handling and error types for skrough-rust.
//!
//! Every fallible operation in the crate returns [`Result`]. Ordinary loop
//! termination inside the processing engine is not an error and never shows up
//! here; see [`crate::processing::stage`].

use std::io;
use thiserror::Error;

/// Main error type for the skrough-rust library.
#[derive(Error, Debug)]
pub enum RoughSetError {
    /// Configuration and validation errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// Array length or shape mismatch
    #[error("Length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// Out of bounds access
    #[error("Index out of bounds: index {index}, length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Malformed factorized data
    #[error("Dataset error: {message}")]
    Dataset { message: String },

    /// Numerical errors such as group label overflow
    #[error("Numerical error: {message}")]
    Numerical { message: String },

    /// Worker pool errors
    #[error("Threading error: {message}")]
    Threading { message: String },

    /// Serialization errors for configs and results
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        #[from]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Internal library errors (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Type alias for Results using RoughSetError
pub type Result<T> = std::result::Result<T, RoughSetError>;

impl RoughSetError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        RoughSetError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        RoughSetError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a length mismatch error
    pub fn dimension_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        RoughSetError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        RoughSetError::IndexOutOfBounds { index, length }
    }

    /// Create a dataset error
    pub fn dataset<S: Into<String>>(message: S) -> Self {
        RoughSetError::Dataset {
            message: message.into(),
        }
    }

    /// Create a numerical error
    pub fn numerical<S: Into<String>>(message: S) -> Self {
        RoughSetError::Numerical {
            message: message.into(),
        }
    }

    /// Create a threading error
    pub fn threading<S: Into<String>>(message: S) -> Self {
        RoughSetError::Threading {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        RoughSetError::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error (should be used sparingly)
    pub fn internal<S: Into<String>>(message: S) -> Self {
        RoughSetError::Internal {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            RoughSetError::Config { .. } => "config",
            RoughSetError::InvalidParameter { .. } => "invalid_parameter",
            RoughSetError::DimensionMismatch { .. } => "dimension_mismatch",
            RoughSetError::IndexOutOfBounds { .. } => "index_out_of_bounds",
            RoughSetError::Dataset { .. } => "dataset",
            RoughSetError::Numerical { .. } => "numerical",
            RoughSetError::Threading { .. } => "threading",
            RoughSetError::Serialization { .. } => "serialization",
            RoughSetError::IO { .. } => "io",
            RoughSetError::Json { .. } => "json",
            RoughSetError::Internal { .. } => "internal",
        }
    }
}

/// Convenience macros for error creation
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::core::error::RoughSetError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::RoughSetError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! dataset_error {
    ($msg:expr) => {
        $crate::core::error::RoughSetError::dataset($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::RoughSetError::dataset(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}

/// Fails with a length mismatch error unless `actual == expected`.
pub(crate) fn ensure_len(what: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(RoughSetError::dimension_mismatch(
            format!("{} of length {}", what, expected),
            actual.to_string(),
        ));
    }
    Ok(())
}
