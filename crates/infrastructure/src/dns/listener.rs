//! UDP listener: owns the socket, decodes/encodes wire messages, and
//! dispatches each datagram to the Pipeline on its own task.

use crate::dns::codec::WireCodec;
use aegis_dns_application::ports::WireCodecPort;
use aegis_dns_application::Pipeline;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const MAX_DATAGRAM_SIZE: usize = 4096;
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

pub struct Listener {
    socket: Arc<UdpSocket>,
    codec: Arc<WireCodec>,
    pipeline: Arc<Pipeline>,
    shutdown: CancellationToken,
}

impl Listener {
    pub fn bind(
        host: &str,
        port: u16,
        pipeline: Arc<Pipeline>,
        shutdown: CancellationToken,
    ) -> std::io::Result<Self> {
        let addr: SocketAddr = (host, port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "no address resolved"))?;

        let domain = if addr.is_ipv6() { Domain::IPV6 } else { Domain::IPV4 };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
        socket.set_reuse_address(true)?;
        socket.set_nonblocking(true)?;
        socket.bind(&addr.into())?;

        let socket = UdpSocket::from_std(socket.into())?;
        info!(%addr, "DNS listener bound");

        Ok(Self {
            socket: Arc::new(socket),
            codec: Arc::new(WireCodec::new()),
            pipeline,
            shutdown,
        })
    }

    /// Runs the accept loop until shutdown is signaled, then waits up to
    /// the bounded grace period for in-flight worker tasks before
    /// returning. Tasks still running after the grace period are
    /// abandoned without error.
    pub async fn run(self) {
        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
        let mut workers: JoinSet<()> = JoinSet::new();

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("listener shutting down, draining in-flight queries");
                    break;
                }
                result = self.socket.recv_from(&mut buf) => {
                    match result {
                        Ok((len, client)) => {
                            let datagram = buf[..len].to_vec();
                            self.spawn_worker(&mut workers, datagram, client);
                        }
                        Err(e) => {
                            warn!(error = %e, "failed to receive datagram");
                        }
                    }
                }
            }
        }

        let drain = async {
            while workers.join_next().await.is_some() {}
        };
        if tokio::time::timeout(SHUTDOWN_GRACE, drain).await.is_err() {
            debug!("shutdown grace period elapsed, abandoning remaining workers");
        }
    }

    fn spawn_worker(&self, workers: &mut JoinSet<()>, datagram: Vec<u8>, client: SocketAddr) {
        let socket = Arc::clone(&self.socket);
        let codec = Arc::clone(&self.codec);
        let pipeline = Arc::clone(&self.pipeline);

        workers.spawn(async move {
            let response = match codec.decode_query(&datagram, client) {
                Some(query) => pipeline.handle(query).await,
                None => codec.build_empty_reply(&datagram),
            };
            if let Err(e) = socket.send_to(&response, client).await {
                warn!(%client, error = %e, "failed to send response");
            }
        });
    }
}
