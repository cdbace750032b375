//! Error types for the TTL hash table
//!
//! Provides unified error handling using thiserror.

use std::collections::TryReserveError;

use thiserror::Error;

// == Table Error Enum ==
/// Unified error type for table operations.
#[derive(Error, Debug)]
pub enum TableError {
    /// Key not present in the table
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Rejected construction parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Storage for buckets or a new entry could not be reserved
    #[error("Allocation failed: {0}")]
    AllocationFailed(#[from] TryReserveError),
}

impl TableError {
    /// Builds a `NotFound` error for a raw key, escaping non-printable bytes.
    pub fn not_found(key: &[u8]) -> Self {
        TableError::NotFound(display_key(key))
    }
}

/// Renders key bytes as printable ASCII (`\x00` style escapes for the rest).
pub fn display_key(key: &[u8]) -> String {
    key.escape_ascii().to_string()
}

// == Result Type Alias ==
/// Convenience Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
