//! Cache Module
//!
//! Bounded in-memory caching with FIFO eviction and time-based expiry.

mod clock;
mod entry;
mod fifo;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use fifo::FifoTracker;
pub use stats::CacheStats;
pub use store::TtlCache;

// == Public Constants ==
/// Default maximum number of entries per cache instance
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Default freshness window in milliseconds
pub const DEFAULT_MAX_AGE_MS: u64 = 60_000;
