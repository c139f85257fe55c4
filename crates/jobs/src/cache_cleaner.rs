use aegis_dns_infrastructure::dns::ResponseCache;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const DEFAULT_INTERVAL_SECS: u64 = 300;

/// Sweeps expired cache entries every 5 minutes.
pub struct CacheCleanerJob {
    cache: Arc<ResponseCache>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheCleanerJob {
    pub fn new(cache: Arc<ResponseCache>) -> Self {
        Self {
            cache,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "starting cache cleaner job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("cache cleaner: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let removed = self.cache.sweep_expired();
                        debug!(removed, "cache cleaner sweep completed");
                    }
                }
            }
        });
    }
}
