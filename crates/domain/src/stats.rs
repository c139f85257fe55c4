use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Monotone query counters, incremented only by the Pipeline. A snapshot
/// read observes a coherent combination of all fields at the moment of the
/// call (each field is independently atomic, so the snapshot is
/// best-effort-coherent rather than transactional — acceptable since the
/// counters only ever increase and a snapshot a few queries stale is not
/// an observable error).
#[derive(Debug, Default)]
pub struct Stats {
    total: AtomicU64,
    blocked: AtomicU64,
    cached: AtomicU64,
}

#[derive(Debug, Clone, Copy)]
pub struct StatsSnapshot {
    pub total: u64,
    pub blocked: u64,
    pub cached: u64,
    pub uptime: std::time::Duration,
}

impl Stats {
    pub fn incr_total(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn incr_blocked(&self) {
        self.blocked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn incr_cached(&self) {
        self.cached.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self, start: Instant) -> StatsSnapshot {
        StatsSnapshot {
            total: self.total.load(Ordering::Relaxed),
            blocked: self.blocked.load(Ordering::Relaxed),
            cached: self.cached.load(Ordering::Relaxed),
            uptime: start.elapsed(),
        }
    }
}
