//! Resolution statistics.
//!
//! Lock-free atomic counters updated on every lookup, and a point-in-time
//! [`CacheStats`] snapshot for display.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time copy of the cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the override table.
    pub override_hits: u64,
    /// Lookups answered from the fixed cache.
    pub fixed_hits: u64,
    /// Calls made to the baking service.
    pub bakes: u64,
    /// Bakes that raised an error.
    pub bake_failures: u64,
    /// Resolutions that kept the sentinel as the visible result.
    pub sentinel_outcomes: u64,
    /// Resolutions recorded as absent.
    pub absent_outcomes: u64,
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits: {} override / {} fixed, bakes: {} ({} failed), outcomes: {} missing / {} absent",
            self.override_hits,
            self.fixed_hits,
            self.bakes,
            self.bake_failures,
            self.sentinel_outcomes,
            self.absent_outcomes
        )
    }
}

#[derive(Debug, Default)]
pub(crate) struct StatsCounters {
    override_hits: AtomicU64,
    fixed_hits: AtomicU64,
    bakes: AtomicU64,
    bake_failures: AtomicU64,
    sentinel_outcomes: AtomicU64,
    absent_outcomes: AtomicU64,
}

impl StatsCounters {
    pub(crate) fn override_hit(&self) {
        self.override_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn fixed_hit(&self) {
        self.fixed_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn bake(&self) {
        self.bakes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn bake_failure(&self) {
        self.bake_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn sentinel_outcome(&self) {
        self.sentinel_outcomes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn absent_outcome(&self) {
        self.absent_outcomes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> CacheStats {
        CacheStats {
            override_hits: self.override_hits.load(Ordering::Relaxed),
            fixed_hits: self.fixed_hits.load(Ordering::Relaxed),
            bakes: self.bakes.load(Ordering::Relaxed),
            bake_failures: self.bake_failures.load(Ordering::Relaxed),
            sentinel_outcomes: self.sentinel_outcomes.load(Ordering::Relaxed),
            absent_outcomes: self.absent_outcomes.load(Ordering::Relaxed),
        }
    }
}
