//! Composition root: wires the concrete `infrastructure` adapters behind
//! the `application` ports and builds the `Pipeline` they back. A thin
//! aggregation struct built once at startup, with no behavior of its own.

use aegis_dns_application::ports::{CachePort, FilterPort, UpstreamPort, WireCodecPort};
use aegis_dns_application::use_cases::{
    AddCustomUseCase, AddWhitelistUseCase, ClearCacheUseCase, GetStatsUseCase,
    ReloadCustomUseCase, RemoveCustomUseCase, RemoveWhitelistUseCase, UpdateAllUseCase,
};
use aegis_dns_application::{Pipeline, PipelineConfig};
use aegis_dns_domain::{Config, Stats};
use aegis_dns_infrastructure::dns::{FilterEngine, ResponseCache, UpstreamPool, WireCodec};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Everything the `cli` binary needs once it has a validated `Config`:
/// the query-path `Pipeline`, the concrete cache (kept around concretely
/// so the cache-cleaner job can call its sweep method, which isn't part
/// of `CachePort`), and the admin-surface use cases a management plane
/// would call into.
pub struct Services {
    pub pipeline: Arc<Pipeline>,
    pub response_cache: Arc<ResponseCache>,
    pub filter: Arc<dyn FilterPort>,
    pub update_all: Arc<UpdateAllUseCase>,
    pub reload_custom: Arc<ReloadCustomUseCase>,
    pub clear_cache: Arc<ClearCacheUseCase>,
    pub add_whitelist: Arc<AddWhitelistUseCase>,
    pub remove_whitelist: Arc<RemoveWhitelistUseCase>,
    pub add_custom: Arc<AddCustomUseCase>,
    pub remove_custom: Arc<RemoveCustomUseCase>,
    pub get_stats: Arc<GetStatsUseCase>,
}

impl Services {
    pub fn build(config: &Config, start: Instant) -> Self {
        let stats = Arc::new(Stats::default());

        let response_cache = Arc::new(ResponseCache::new(
            config.cache.max_size,
            Duration::from_secs(config.cache.ttl_secs),
        ));
        let cache: Arc<dyn CachePort> = response_cache.clone();

        let filter: Arc<dyn FilterPort> = Arc::new(FilterEngine::new(
            config.blocklists.sources.clone(),
            config.blocklists.custom_path.clone(),
            config.filtering.schedule.clone(),
            config.whitelist.domains.clone(),
        ));

        let upstream: Arc<dyn UpstreamPort> =
            Arc::new(UpstreamPool::new(config.server.upstream_dns.clone()));
        let codec: Arc<dyn WireCodecPort> = Arc::new(WireCodec::new());

        let pipeline_config = PipelineConfig {
            filtering_enabled: config.filtering.enabled,
            block_action: config.filtering.block_action,
            redirect_ip: config.filtering.redirect_ip,
            query_logging_enabled: true,
        };
        let pipeline = Arc::new(Pipeline::new(
            Arc::clone(&cache),
            Arc::clone(&filter),
            upstream,
            codec,
            stats.clone(),
            pipeline_config,
        ));

        Self {
            pipeline,
            response_cache,
            update_all: Arc::new(UpdateAllUseCase::new(Arc::clone(&filter), Arc::clone(&cache))),
            reload_custom: Arc::new(ReloadCustomUseCase::new(
                Arc::clone(&filter),
                Arc::clone(&cache),
            )),
            clear_cache: Arc::new(ClearCacheUseCase::new(Arc::clone(&cache))),
            add_whitelist: Arc::new(AddWhitelistUseCase::new(Arc::clone(&filter))),
            remove_whitelist: Arc::new(RemoveWhitelistUseCase::new(Arc::clone(&filter))),
            add_custom: Arc::new(AddCustomUseCase::new(Arc::clone(&filter))),
            remove_custom: Arc::new(RemoveCustomUseCase::new(Arc::clone(&filter))),
            get_stats: Arc::new(GetStatsUseCase::new(stats, start, Arc::clone(&filter), cache)),
            filter,
        }
    }
}
