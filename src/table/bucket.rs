//! Bucket Chain Module
//!
//! Holds the entries whose keys hashed to one bucket.

use std::collections::TryReserveError;

use crate::table::Entry;

// == Bucket ==
/// A collision chain in insertion order.
#[derive(Debug)]
pub struct Bucket<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Default for Bucket<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Bucket<V> {
    /// Creates an empty chain. Does not allocate.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Position of `key` in the chain, if present.
    pub fn position(&self, key: &[u8]) -> Option<usize> {
        self.entries.iter().position(|e| e.matches(key))
    }

    pub fn find(&self, key: &[u8]) -> Option<&Entry<V>> {
        self.entries.iter().find(|e| e.matches(key))
    }

    pub fn find_mut(&mut self, key: &[u8]) -> Option<&mut Entry<V>> {
        self.entries.iter_mut().find(|e| e.matches(key))
    }

    // == Insert ==
    /// Appends a new entry. The slot is reserved first so a failed
    /// allocation leaves the chain untouched.
    pub fn insert(&mut self, entry: Entry<V>) -> Result<(), TryReserveError> {
        self.entries.try_reserve(1)?;
        self.entries.push(entry);
        Ok(())
    }

    // == Unlink ==
    /// Removes and returns the entry at `index`, keeping chain order.
    pub fn unlink(&mut self, index: usize) -> Entry<V> {
        self.entries.remove(index)
    }

    // == Sweep ==
    /// Advances every entry by one tick and hands each expired entry to
    /// `expire` in chain order. Returns the number expired.
    ///
    /// One pass over the chain; survivors are compacted in place.
    pub fn sweep(&mut self, mut expire: impl FnMut(Entry<V>)) -> usize {
        let mut expired = 0;
        for entry in self.entries.extract_if(.., |e| e.advance()) {
            expire(entry);
            expired += 1;
        }
        expired
    }

    // == Drain ==
    /// Empties the chain, yielding entries in chain order.
    pub fn drain(&mut self) -> impl Iterator<Item = Entry<V>> + '_ {
        self.entries.drain(..)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
