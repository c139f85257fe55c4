//! Aegis DNS — filtering DNS resolver core.
//!
//! Builds a validated [`Config`](aegis_dns_domain::Config), wires the
//! Listener, Pipeline, Cache, Filter Engine, and Upstream Pool behind it,
//! loads the initial blocklist state, then runs the UDP accept loop
//! alongside the cache-cleaner and blocklist auto-updater background jobs
//! until a shutdown signal arrives.
//!
//! The web dashboard, REST API, and persistent query logging are treated
//! as external collaborators and are not started here — this binary is
//! the query-path core only.

mod bootstrap;
mod di;
mod server;

use aegis_dns_jobs::{BlocklistAutoUpdateJob, CacheCleanerJob};
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bootstrap::init_logging();
    let config = bootstrap::load_config();
    let start = Instant::now();

    let services = di::Services::build(&config, start);

    // Initial blocklist population. A failure here is non-fatal: the
    // resolver still starts, it simply forwards every query until the
    // next successful update.
    match services.reload_custom.execute().await {
        Ok(count) => info!(custom_entries = count, "initial custom blocklist loaded"),
        Err(e) => warn!(error = %e, "initial custom blocklist load failed"),
    }
    match services.update_all.execute().await {
        Ok(count) => info!(blocked_domains = count, "initial remote blocklist load complete"),
        Err(e) => warn!(error = %e, "initial remote blocklist load failed, starting with an empty set"),
    }

    let shutdown = CancellationToken::new();

    let cleaner_job = std::sync::Arc::new(
        CacheCleanerJob::new(services.response_cache.clone()).with_cancellation(shutdown.clone()),
    );
    cleaner_job.start().await;

    let auto_update_job = std::sync::Arc::new(
        BlocklistAutoUpdateJob::new(
            services.update_all.clone(),
            config.blocklists.auto_update_interval_hours,
        )
        .with_cancellation(shutdown.clone()),
    );
    auto_update_job.start().await;

    let dns_task = tokio::spawn(server::start_dns_server(
        config.server.dns_host.clone(),
        config.server.dns_port,
        services.pipeline.clone(),
        shutdown.clone(),
    ));

    info!(
        host = %config.server.dns_host,
        port = config.server.dns_port,
        "aegis-dns ready"
    );

    tokio::signal::ctrl_c().await?;
    info!("shutdown signal received");
    shutdown.cancel();

    match dns_task.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(error = %e, "dns listener exited with an error"),
        Err(e) => error!(error = %e, "dns listener task panicked"),
    }

    info!("aegis-dns stopped");
    Ok(())
}
