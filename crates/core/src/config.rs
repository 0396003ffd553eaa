use crate::error::{MinimError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Counts above this threshold produce word lists in the hundreds of millions;
/// persisting them requires the explicit opt-in.
pub const LARGE_COUNT_THRESHOLD: u32 = 32;

/// Configuration for the persistent word cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Directory holding one record file per stroke count
    pub cache_dir: PathBuf,

    /// Largest stroke count whose record is written to disk; larger counts
    /// are computed but never persisted
    pub max_persisted_count: u32,

    /// Opt in to a `max_persisted_count` above [`LARGE_COUNT_THRESHOLD`]
    pub allow_large: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(".minim-cache"),
            max_persisted_count: 16,
            allow_large: false,
        }
    }
}

impl CacheConfig {
    /// Create a config persisting counts up to `max_persisted_count` under `cache_dir`
    pub fn new(cache_dir: impl Into<PathBuf>, max_persisted_count: u32) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            max_persisted_count,
            ..Default::default()
        }
    }

    /// Builder: opt in to persisting counts above the safety threshold
    #[must_use]
    pub const fn allow_large(mut self) -> Self {
        self.allow_large = true;
        self
    }

    /// Reject a persistence ceiling above the threshold without the opt-in
    pub fn validate(&self) -> Result<()> {
        if self.max_persisted_count > LARGE_COUNT_THRESHOLD && !self.allow_large {
            return Err(MinimError::invalid_config(format!(
                "max_persisted_count {} exceeds {LARGE_COUNT_THRESHOLD}; set allow_large to persist records this big",
                self.max_persisted_count
            )));
        }
        Ok(())
    }
}
