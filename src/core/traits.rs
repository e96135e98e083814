//! Core trait definitions for skrough-rust.

use crate::core::error::{Result, RoughSetError};
use serde::{Deserialize, Serialize};

/// Trait for result value objects that callers persist.
pub trait Persistable: Serialize + for<'de> Deserialize<'de> {
    /// Save to a file in bincode format.
    fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        bincode::serialize_into(file, self).map_err(|e| {
            RoughSetError::serialization(format!("Failed to serialize: {}", e))
        })
    }

    /// Load from a bincode file.
    fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self>
    where
        Self: Sized,
    {
        let file = std::fs::File::open(path)?;
        bincode::deserialize_from(file).map_err(|e| {
            RoughSetError::serialization(format!("Failed to deserialize: {}", e))
        })
    }

    /// Serialize to a JSON string.
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON string.
    fn from_json(json: &str) -> Result<Self>
    where
        Self: Sized,
    {
        Ok(serde_json::from_str(json)?)
    }
}
