//! TTL Cache Store Module
//!
//! Bounded key-value store combining HashMap storage, FIFO eviction and
//! lazy time-based expiry.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, FifoTracker, SystemClock};
use crate::error::CacheError;

// == TTL Cache ==
/// Bounded cache whose entries stay valid for `max_age` after insertion.
///
/// When a new key would push the cache past `max_entries`, the earliest
/// inserted entry is evicted. Expiry is checked against the injected clock
/// whenever an entry is looked up; nothing runs in the background.
#[derive(Debug)]
pub struct TtlCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Insertion order tracker
    fifo: FifoTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Freshness window for every entry
    max_age: Duration,
    /// Time source
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates a cache backed by the system clock.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries, clamped to at least 1
    /// * `max_age` - How long an entry stays fresh after insertion
    pub fn new(max_entries: usize, max_age: Duration) -> Self {
        Self::with_clock(max_entries, max_age, Arc::new(SystemClock))
    }

    /// Creates a cache that reads time from `clock`.
    pub fn with_clock(max_entries: usize, max_age: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            fifo: FifoTracker::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            max_age,
            clock,
        }
    }

    // == Has ==
    /// Returns true if `key` holds a fresh entry.
    ///
    /// Does not touch statistics or remove stale entries.
    pub fn has(&self, key: &str) -> bool {
        let now = self.clock.now();
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(now, self.max_age))
    }

    // == Get ==
    /// Returns a clone of the value stored under `key` if it is fresh.
    ///
    /// A stale entry is removed and reported as `NotFound`, same as a
    /// missing key.
    pub fn get(&mut self, key: &str) -> Result<V, CacheError> {
        let now = self.clock.now();

        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return Err(CacheError::NotFound(key.to_string()));
        };

        if entry.is_expired(now, self.max_age) {
            self.remove_entry(key);
            self.stats.record_expirations(1);
            self.stats.record_miss();
            debug!(key, "Cache entry expired");
            return Err(CacheError::NotFound(key.to_string()));
        }

        let value = entry.value.clone();
        debug!(
            key,
            remaining_ms = entry.remaining(now, self.max_age).as_millis() as u64,
            "Cache hit"
        );
        self.stats.record_hit();
        Ok(value)
    }

    // == Set ==
    /// Stores `value` under `key` with a fresh insertion instant.
    ///
    /// Overwriting an existing key never evicts; it resets the entry's age
    /// and makes it the newest insertion. A new key arriving at capacity
    /// evicts exactly one entry, the earliest inserted.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted) = self.fifo.evict_oldest() {
                self.entries.remove(&evicted);
                self.stats.record_eviction();
                debug!(key = %evicted, "Evicted oldest cache entry");
            }
        }

        let entry = CacheEntry::new(value, self.clock.now());
        self.fifo.record_insert(&key);
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Purge Expired ==
    /// Removes every stale entry and returns how many were dropped.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let max_age = self.max_age;
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now, max_age))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.remove_entry(key);
        }

        self.stats.record_expirations(expired.len());
        expired.len()
    }

    // == Stats ==
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Number of stored entries, including stale ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    fn remove_entry(&mut self, key: &str) {
        self.entries.remove(key);
        self.fifo.remove(key);
        self.stats.set_total_entries(self.entries.len());
    }
}
