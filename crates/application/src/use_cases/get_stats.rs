use crate::ports::{CachePort, FilterPort};
use aegis_dns_domain::{Stats, StatsSnapshot};
use std::sync::Arc;
use std::time::Instant;

/// Admin-surface `Stats() → {total, blocked, cached, uptime,
/// blockedDomainCount}`.
#[derive(Debug, Clone, Copy)]
pub struct StatsView {
    pub total: u64,
    pub blocked: u64,
    pub cached: u64,
    pub uptime_secs: u64,
    pub blocked_domain_count: usize,
    pub cache_size: usize,
}

pub struct GetStatsUseCase {
    stats: Arc<Stats>,
    start: Instant,
    filter: Arc<dyn FilterPort>,
    cache: Arc<dyn CachePort>,
}

impl GetStatsUseCase {
    pub fn new(
        stats: Arc<Stats>,
        start: Instant,
        filter: Arc<dyn FilterPort>,
        cache: Arc<dyn CachePort>,
    ) -> Self {
        Self {
            stats,
            start,
            filter,
            cache,
        }
    }

    pub fn execute(&self) -> StatsView {
        let StatsSnapshot {
            total,
            blocked,
            cached,
            uptime,
        } = self.stats.snapshot(self.start);
        StatsView {
            total,
            blocked,
            cached,
            uptime_secs: uptime.as_secs(),
            blocked_domain_count: self.filter.blocked_domain_count(),
            cache_size: self.cache.size(),
        }
    }
}
