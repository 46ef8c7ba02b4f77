//! Derived address → decision cache for the request hot path.

use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

/// Lookup table of previously computed allow/deny decisions.
///
/// Entries are created lazily on first query and there is no eviction: the
/// address population of a local administration console is small enough that
/// unbounded growth is acceptable. The cache is pure derived data; clearing
/// it costs hit rate, never correctness.
///
/// Hit and miss counters are exposed so cache reuse can be asserted
/// structurally in tests instead of by timing.
#[derive(Debug, Default)]
pub struct MembershipCache {
    entries: DashMap<IpAddr, bool>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MembershipCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously stored decision.
    pub fn get(&self, addr: IpAddr) -> Option<bool> {
        match self.entries.get(&addr) {
            Some(decision) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(*decision)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store a computed decision.
    pub fn insert(&self, addr: IpAddr, allowed: bool) {
        self.entries.insert(addr, allowed);
    }

    /// Drop every stored decision. Counters keep counting; they are
    /// diagnostics, not state.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Total lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Total lookups that had to be computed.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Number of cached decisions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
