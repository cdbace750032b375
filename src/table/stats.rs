//! Table Statistics Module
//!
//! Tracks lookups, release paths and tick progress.

use serde::Serialize;

// == Table Stats ==
/// Counters for table activity.
///
/// Every release callback invocation is counted in exactly one of
/// `expirations`, `replacements`, `removals` or `drained`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableStats {
    /// Lookups that found their key
    pub hits: u64,
    /// Lookups that did not
    pub misses: u64,
    /// Entries released by `tick`
    pub expirations: u64,
    /// Values released because `put` superseded them
    pub replacements: u64,
    /// Entries released by a successful `rem`
    pub removals: u64,
    /// Entries released when the table was closed
    pub drained: u64,
    /// Number of `tick` calls so far
    pub ticks: u64,
    /// Current number of entries in the table
    pub total_entries: usize,
}

impl TableStats {
    // == Constructor ==
    /// Creates a new TableStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the lookup hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Evictions ==
    /// Total values released on any path.
    pub fn evictions(&self) -> u64 {
        self.expirations + self.replacements + self.removals + self.drained
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    pub fn record_replacement(&mut self) {
        self.replacements += 1;
    }

    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    pub fn record_drained(&mut self, count: usize) {
        self.drained += count as u64;
    }

    pub fn record_tick(&mut self) {
        self.ticks += 1;
    }

    // == Update Entry Count ==
    /// Updates the total entries count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
