use tracing_subscriber::EnvFilter;

/// Initializes the global `tracing` subscriber: target display on, no
/// thread IDs, ANSI color on. The level comes from the standard
/// `RUST_LOG` variable rather than a `Config` field — config-file loading
/// is out of scope for this core, so there is no `logging.level` to read;
/// `info` is the default when `RUST_LOG` is unset.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(true)
        .with_env_filter(filter)
        .init();

    tracing::info!("logging initialized");
}
