//! Configuration Module
//!
//! Handles loading table and simulation settings from environment variables.

use std::env;

use crate::error::{Result, TableError};

/// Table configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of bucket chains, fixed for the table's lifetime
    pub bucket_count: usize,
    /// Ticks an untouched entry survives
    pub ttl_max: u32,
    /// Number of ticks the session simulation runs for
    pub sim_ticks: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `TTL_HASH_BUCKETS` - Bucket count (default: 16)
    /// - `TTL_HASH_TTL` - Maximum TTL in ticks (default: 3)
    /// - `TTL_HASH_SIM_TICKS` - Simulation length in ticks (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bucket_count: env::var("TTL_HASH_BUCKETS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.bucket_count),
            ttl_max: env::var("TTL_HASH_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl_max),
            sim_ticks: env::var("TTL_HASH_SIM_TICKS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sim_ticks),
        }
    }

    /// Rejects a zero bucket count or a zero TTL.
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.bucket_count, self.ttl_max)
    }
}

/// Table dimensions accepted by `open`: both must be at least 1.
pub(crate) fn check_dimensions(bucket_count: usize, ttl_max: u32) -> Result<()> {
    if bucket_count == 0 {
        return Err(TableError::InvalidConfig(
            "bucket_count must be at least 1".to_string(),
        ));
    }
    if ttl_max == 0 {
        return Err(TableError::InvalidConfig(
            "ttl_max must be at least 1".to_string(),
        ));
    }
    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket_count: 16,
            ttl_max: 3,
            sim_ticks: 10,
        }
    }
}
