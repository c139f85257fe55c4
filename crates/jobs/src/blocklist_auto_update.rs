use aegis_dns_application::use_cases::UpdateAllUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const SECS_PER_HOUR: u64 = 3_600;

/// Periodically runs `UpdateAll`, per `blocklists.auto_update_interval`
/// (hours). Failures are logged and the job continues — a background
/// task never crashes the process.
pub struct BlocklistAutoUpdateJob {
    update_all: Arc<UpdateAllUseCase>,
    interval_hours: u64,
    shutdown: CancellationToken,
}

impl BlocklistAutoUpdateJob {
    pub fn new(update_all: Arc<UpdateAllUseCase>, interval_hours: u64) -> Self {
        Self {
            update_all,
            interval_hours,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_hours = self.interval_hours,
            "starting blocklist auto-update job"
        );

        tokio::spawn(async move {
            let interval_secs = self.interval_hours.saturating_mul(SECS_PER_HOUR).max(1);
            let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("blocklist auto-update: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.update_all.execute().await {
                            Ok(count) => info!(blocked_domains = count, "blocklist update completed"),
                            Err(e) => error!(error = %e, "blocklist update failed"),
                        }
                    }
                }
            }
        });
    }
}
