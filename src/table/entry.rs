//! Table Entry Module
//!
//! Defines a single chained entry with its tick countdown.

use std::collections::TryReserveError;

// == Table Entry ==
/// A key, its opaque value and the ticks it has left.
#[derive(Debug)]
pub struct Entry<V> {
    /// Owned key bytes, compared by length and content
    pub key: Box<[u8]>,
    /// The stored value, never inspected by the table
    pub value: V,
    /// Ticks left before expiry, in `[0, ttl_max]`
    pub remaining: u32,
}

impl<V> Entry<V> {
    // == Constructor ==
    /// Creates an entry with a full countdown.
    ///
    /// The key is copied through a fallible reservation, so running out of
    /// memory is reported instead of aborting.
    pub fn new(key: &[u8], value: V, ttl_max: u32) -> Result<Self, TryReserveError> {
        let mut owned = Vec::new();
        owned.try_reserve_exact(key.len())?;
        owned.extend_from_slice(key);

        Ok(Self {
            key: owned.into_boxed_slice(),
            value,
            remaining: ttl_max,
        })
    }

    /// Returns true if this entry holds exactly `key`.
    #[inline]
    pub fn matches(&self, key: &[u8]) -> bool {
        *self.key == *key
    }

    // == Refresh ==
    /// Restarts the countdown from `ttl_max`.
    pub fn refresh(&mut self, ttl_max: u32) {
        self.remaining = ttl_max;
    }

    // == Advance ==
    /// Consumes one tick. Returns true once the countdown reaches zero.
    pub fn advance(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}
