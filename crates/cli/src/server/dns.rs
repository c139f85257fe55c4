use aegis_dns_application::Pipeline;
use aegis_dns_infrastructure::dns::Listener;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Binds the UDP listener and runs its accept loop until `shutdown` is
/// cancelled. The listener itself does the per-datagram dispatch rather
/// than handing off to an external server-future runtime.
pub async fn start_dns_server(
    host: String,
    port: u16,
    pipeline: Arc<Pipeline>,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    let listener = Listener::bind(&host, port, pipeline, shutdown)?;
    listener.run().await;
    Ok(())
}
