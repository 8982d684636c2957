//! Single-value cache with a time-to-live.
//!
//! The explorer's current block height is read on nearly every screen, but it
//! only changes every few minutes. [`TtlCache`] keeps the last value together
//! with the instant it was stored and serves it until the TTL runs out. The
//! clock is injectable so tests can move time forward without sleeping, and
//! the process-wide instance returned by [`block_height_cache`] can be
//! [`reset`](TtlCache::reset) between tests.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::fmt::Display;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How long a fetched block height is considered current.
pub const DEFAULT_BLOCK_HEIGHT_TTL: Duration = Duration::from_secs(30);

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }
}

impl ManualClock {
    /// Creates a clock frozen at the current instant.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Read/write access to a single cached value.
pub trait ValueCache<T>: Send + Sync {
    /// The value if it is still fresh.
    fn get(&self) -> Option<T>;

    /// Stores a value, stamping it with the current time.
    fn set(&self, value: T);

    /// Drops the cached value.
    fn reset(&self);
}

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    updated_at: Instant,
}

/// One cached value, its last-updated instant and a TTL.
pub struct TtlCache<T> {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entry: Mutex<Option<Entry<T>>>,
}

impl<T: Clone + Send> TtlCache<T> {
    /// Creates an empty cache using the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache driven by `clock`.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            entry: Mutex::new(None),
        }
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, Option<Entry<T>>> {
        self.entry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn fresh(&self, entry: &Entry<T>) -> bool {
        self.clock.now().saturating_duration_since(entry.updated_at) < self.ttl
    }

    /// Whether a value is stored and younger than the TTL.
    pub fn is_fresh(&self) -> bool {
        self.lock().as_ref().is_some_and(|e| self.fresh(e))
    }

    /// The last stored value, fresh or not.
    pub fn stale(&self) -> Option<T> {
        self.lock().as_ref().map(|e| e.value.clone())
    }

    /// Time since the value was stored.
    pub fn age(&self) -> Option<Duration> {
        self.lock()
            .as_ref()
            .map(|e| self.clock.now().saturating_duration_since(e.updated_at))
    }

    /// Returns the fresh value, or calls `fetch` and stores its result.
    ///
    /// A failed fetch leaves any previous value in place (still reachable
    /// through [`stale`](Self::stale)) and is reported as [`Error::Fetch`].
    pub fn get_or_refresh<E, F>(&self, fetch: F) -> Result<T>
    where
        E: Display,
        F: FnOnce() -> std::result::Result<T, E>,
    {
        if let Some(entry) = self.lock().as_ref() {
            if self.fresh(entry) {
                return Ok(entry.value.clone());
            }
        }

        match fetch() {
            Ok(value) => {
                self.set(value.clone());
                debug!(ttl_secs = self.ttl.as_secs(), "cache refreshed");
                Ok(value)
            }
            Err(err) => {
                warn!(error = %err, "cache refresh failed, keeping previous value");
                Err(Error::Fetch(err.to_string()))
            }
        }
    }
}

impl<T: Clone + Send> ValueCache<T> for TtlCache<T> {
    fn get(&self) -> Option<T> {
        self.lock()
            .as_ref()
            .filter(|e| self.fresh(e))
            .map(|e| e.value.clone())
    }

    fn set(&self, value: T) {
        *self.lock() = Some(Entry {
            value,
            updated_at: self.clock.now(),
        });
    }

    fn reset(&self) {
        *self.lock() = None;
    }
}

static BLOCK_HEIGHT: Lazy<TtlCache<u64>> = Lazy::new(|| TtlCache::new(DEFAULT_BLOCK_HEIGHT_TTL));

/// The process-wide block-height cache.
pub fn block_height_cache() -> &'static TtlCache<u64> {
    &BLOCK_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn manual(ttl_secs: u64) -> (Arc<ManualClock>, TtlCache<u64>) {
        let clock = Arc::new(ManualClock::new());
        let cache = TtlCache::with_clock(Duration::from_secs(ttl_secs), clock.clone());
        (clock, cache)
    }

    #[test]
    fn test_empty_cache() {
        let (_, cache) = manual(30);
        assert_eq!(cache.get(), None);
        assert_eq!(cache.stale(), None);
        assert!(!cache.is_fresh());
        assert_eq!(cache.age(), None);
    }

    #[test]
    fn test_value_expires_after_ttl() {
        let (clock, cache) = manual(30);
        cache.set(150_000);
        assert_eq!(cache.get(), Some(150_000));

        clock.advance(Duration::from_secs(29));
        assert!(cache.is_fresh());

        clock.advance(Duration::from_secs(1));
        assert_eq!(cache.get(), None);
        assert_eq!(cache.stale(), Some(150_000));
        assert_eq!(cache.age(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_get_or_refresh_fetches_once_while_fresh() {
        let (clock, cache) = manual(30);
        let calls = Cell::new(0);
        let fetch = || {
            calls.set(calls.get() + 1);
            Ok::<_, String>(100 + calls.get())
        };

        assert_eq!(cache.get_or_refresh(fetch).unwrap(), 101);
        assert_eq!(cache.get_or_refresh(fetch).unwrap(), 101);
        assert_eq!(calls.get(), 1);

        clock.advance(Duration::from_secs(31));
        assert_eq!(cache.get_or_refresh(fetch).unwrap(), 102);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_failed_refresh_keeps_stale_value() {
        let (clock, cache) = manual(10);
        cache.set(7);
        clock.advance(Duration::from_secs(11));

        let err = cache
            .get_or_refresh(|| Err::<u64, _>("explorer unavailable"))
            .unwrap_err();
        assert_eq!(err, Error::Fetch("explorer unavailable".to_string()));
        assert_eq!(cache.stale(), Some(7));
    }

    #[test]
    fn test_reset() {
        let (_, cache) = manual(30);
        cache.set(1);
        cache.reset();
        assert_eq!(cache.stale(), None);
    }

    #[test]
    fn test_global_cache_resets() {
        let cache = block_height_cache();
        cache.reset();
        assert_eq!(cache.ttl(), DEFAULT_BLOCK_HEIGHT_TTL);
        assert_eq!(cache.get_or_refresh(|| Ok::<_, String>(42)).unwrap(), 42);
        assert_eq!(cache.get(), Some(42));
        cache.reset();
        assert_eq!(cache.get(), None);
    }
}
