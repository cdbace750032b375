//! TTL Table Store Module
//!
//! Main table engine: fixed bucket array, chained entries and a tick-driven
//! sliding TTL with a release callback on every removal path.

use std::fmt;

use tracing::{debug, trace};

use crate::config::{check_dimensions, Config};
use crate::error::{display_key, Result, TableError};
use crate::table::{bucket_index, Bucket, Entry, TableStats};

/// Release callback, invoked with the key and the value the table gives up.
pub type EvictFn<V> = Box<dyn FnMut(&[u8], V)>;

// == TTL Hash ==
/// Fixed-size chained hash table whose entries expire after `ttl_max`
/// ticks without a `put` or a successful `get`.
///
/// The table never rehashes. Time only moves when [`TtlHash::tick`] is
/// called, and expired entries are released during that call.
pub struct TtlHash<V> {
    /// Bucket chains, length fixed at open
    buckets: Vec<Bucket<V>>,
    /// Countdown restored on put and on a lookup hit
    ttl_max: u32,
    /// Receives every value the table stops tracking
    on_evict: Option<EvictFn<V>>,
    /// Live entries across all chains
    len: usize,
    /// Activity counters
    stats: TableStats,
}

impl<V> TtlHash<V> {
    // == Open ==
    /// Creates a table with `bucket_count` empty chains.
    ///
    /// # Arguments
    /// * `bucket_count` - Number of chains, at least 1
    /// * `ttl_max` - Ticks an untouched entry survives, at least 1
    /// * `on_evict` - Optional release callback; without one, released values are dropped
    ///
    /// # Errors
    /// `InvalidConfig` for a zero argument, `AllocationFailed` if the bucket
    /// array cannot be reserved.
    pub fn open(bucket_count: usize, ttl_max: u32, on_evict: Option<EvictFn<V>>) -> Result<Self> {
        check_dimensions(bucket_count, ttl_max)?;

        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count)?;
        buckets.resize_with(bucket_count, Bucket::new);

        debug!(bucket_count, ttl_max, "TTL table opened");

        Ok(Self {
            buckets,
            ttl_max,
            on_evict,
            len: 0,
            stats: TableStats::new(),
        })
    }

    /// Creates a table sized by `config`.
    pub fn from_config(config: &Config, on_evict: Option<EvictFn<V>>) -> Result<Self> {
        Self::open(config.bucket_count, config.ttl_max, on_evict)
    }

    // == Put ==
    /// Stores `value` under `key` with a full countdown.
    ///
    /// If the key is already present, the previous value is released through
    /// the callback and replaced.
    ///
    /// # Errors
    /// `AllocationFailed` if the key copy or the chain slot cannot be
    /// reserved. The table is left unchanged, and `value` is dropped without
    /// reaching the release callback since the table never tracked it.
    pub fn put(&mut self, key: &[u8], value: V) -> Result<()> {
        let index = bucket_index(key, self.buckets.len());
        let ttl_max = self.ttl_max;

        if let Some(entry) = self.buckets[index].find_mut(key) {
            let previous = std::mem::replace(&mut entry.value, value);
            entry.refresh(ttl_max);
            self.stats.record_replacement();
            trace!(key = %display_key(key), "value replaced");
            if let Some(on_evict) = self.on_evict.as_mut() {
                on_evict(key, previous);
            }
            return Ok(());
        }

        let entry = Entry::new(key, value, ttl_max)?;
        self.buckets[index].insert(entry)?;
        self.len += 1;
        self.stats.set_total_entries(self.len);
        Ok(())
    }

    // == Get ==
    /// Looks up `key`. A hit restarts the entry's countdown.
    pub fn get(&mut self, key: &[u8]) -> Option<&V> {
        let index = bucket_index(key, self.buckets.len());
        let ttl_max = self.ttl_max;

        match self.buckets[index].find_mut(key) {
            Some(entry) => {
                entry.refresh(ttl_max);
                self.stats.record_hit();
                Some(&entry.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Rem ==
    /// Removes `key` and releases its value.
    ///
    /// # Errors
    /// `NotFound` if the key is absent; nothing is released in that case.
    pub fn rem(&mut self, key: &[u8]) -> Result<()> {
        let index = bucket_index(key, self.buckets.len());
        let bucket = &mut self.buckets[index];

        let Some(position) = bucket.position(key) else {
            return Err(TableError::not_found(key));
        };
        let entry = bucket.unlink(position);

        self.len -= 1;
        self.stats.record_removal();
        self.stats.set_total_entries(self.len);
        trace!(key = %display_key(key), "entry removed");

        release(&mut self.on_evict, entry);
        Ok(())
    }

    // == Tick ==
    /// Advances logical time by one unit.
    ///
    /// Every entry loses one tick; those reaching zero are unlinked and
    /// released before this returns, in bucket order then chain order.
    pub fn tick(&mut self) {
        let Self {
            buckets,
            on_evict,
            len,
            stats,
            ..
        } = self;

        let mut expired = 0;
        for bucket in buckets.iter_mut() {
            expired += bucket.sweep(|entry| release(on_evict, entry));
        }

        *len -= expired;
        stats.record_tick();
        stats.record_expirations(expired);
        stats.set_total_entries(*len);

        if expired > 0 {
            debug!(tick = stats.ticks, expired, "expired entries swept");
        }
    }

    // == Close ==
    /// Releases every surviving entry exactly once and frees the table.
    ///
    /// Returns the final statistics.
    pub fn close(mut self) -> TableStats {
        let drained = self.drain_all();
        debug!(drained, "TTL table closed");
        self.stats.clone()
    }

    fn drain_all(&mut self) -> usize {
        let Self {
            buckets,
            on_evict,
            len,
            stats,
            ..
        } = self;

        let mut drained = 0;
        for bucket in buckets.iter_mut() {
            for entry in bucket.drain() {
                release(on_evict, entry);
                drained += 1;
            }
        }

        *len = 0;
        stats.record_drained(drained);
        stats.set_total_entries(0);
        drained
    }

    // == Inspection ==
    /// Returns true if `key` is present. Does not refresh.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.bucket_for(key).find(key).is_some()
    }

    /// Ticks left for `key`, or None if absent. Does not refresh.
    pub fn ttl_remaining(&self, key: &[u8]) -> Option<u32> {
        self.bucket_for(key).find(key).map(|e| e.remaining)
    }

    /// Length of the longest collision chain.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Bucket::len).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn ttl_max(&self) -> u32 {
        self.ttl_max
    }

    /// Number of ticks since open.
    pub fn ticks(&self) -> u64 {
        self.stats.ticks
    }

    /// Returns current table statistics.
    pub fn stats(&self) -> TableStats {
        self.stats.clone()
    }

    fn bucket_for(&self, key: &[u8]) -> &Bucket<V> {
        &self.buckets[bucket_index(key, self.buckets.len())]
    }
}

impl<V> Drop for TtlHash<V> {
    fn drop(&mut self) {
        if self.len > 0 {
            self.drain_all();
        }
    }
}

impl<V> fmt::Debug for TtlHash<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlHash")
            .field("bucket_count", &self.buckets.len())
            .field("ttl_max", &self.ttl_max)
            .field("len", &self.len)
            .field("on_evict", &self.on_evict.is_some())
            .finish()
    }
}

/// Hands an unlinked entry to the callback, or drops it.
fn release<V>(on_evict: &mut Option<EvictFn<V>>, entry: Entry<V>) {
    if let Some(on_evict) = on_evict.as_mut() {
        let Entry { key, value, .. } = entry;
        on_evict(&key[..], value);
    }
}
