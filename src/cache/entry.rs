//! Cache Entry Module
//!
//! Defines a single cached value together with its insertion instant.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value and the instant it was inserted.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Monotonic insertion instant
    pub inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    pub fn new(value: V, inserted_at: Instant) -> Self {
        Self { value, inserted_at }
    }

    // == Age ==
    /// Time elapsed since insertion, as seen at `now`.
    ///
    /// Saturates to zero if `now` is earlier than the insertion instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.inserted_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is stale at `now`.
    ///
    /// An entry whose age equals `max_age` exactly is still fresh; it only
    /// expires once the age strictly exceeds `max_age`.
    pub fn is_expired(&self, now: Instant, max_age: Duration) -> bool {
        self.age(now) > max_age
    }

    // == Remaining Freshness ==
    /// Time left before the entry goes stale, zero once it has.
    pub fn remaining(&self, now: Instant, max_age: Duration) -> Duration {
        max_age.saturating_sub(self.age(now))
    }
}
