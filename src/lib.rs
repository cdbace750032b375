//! TTL Hash - A fixed-bucket hash table with sliding tick-based TTL
//!
//! Entries expire after a configured number of ticks unless refreshed by a
//! lookup, and every value the table gives up is handed to a release callback.

pub mod config;
pub mod error;
pub mod sim;
pub mod table;

pub use config::Config;
pub use error::{Result, TableError};
pub use table::{EvictFn, TableStats, TtlHash};
