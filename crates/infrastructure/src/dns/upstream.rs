//! Round-robin upstream pool and the verbatim UDP forward operation.

use aegis_dns_application::ports::UpstreamPort;
use aegis_dns_domain::DomainError;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::warn;

const DEFAULT_UPSTREAM: &str = "8.8.8.8:53";
const FORWARD_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_RESPONSE_SIZE: usize = 4096;

pub struct UpstreamPool {
    servers: RwLock<Vec<String>>,
    next: AtomicUsize,
}

impl UpstreamPool {
    pub fn new(servers: Vec<String>) -> Self {
        let servers = if servers.is_empty() {
            vec![DEFAULT_UPSTREAM.to_string()]
        } else {
            servers
        };
        Self {
            servers: RwLock::new(servers),
            next: AtomicUsize::new(0),
        }
    }

    fn next_server(&self) -> Option<String> {
        let servers = self.servers.read().expect("upstream lock poisoned");
        if servers.is_empty() {
            return None;
        }
        let index = self.next.fetch_add(1, Ordering::Relaxed) % servers.len();
        Some(servers[index].clone())
    }
}

#[async_trait]
impl UpstreamPort for UpstreamPool {
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        let server = self.next_server().ok_or(DomainError::NoUpstreamServers)?;
        let server_addr: SocketAddr = server
            .parse()
            .map_err(|e| DomainError::UpstreamUnavailable(format!("invalid server {server}: {e}")))?;

        let result = tokio::time::timeout(FORWARD_TIMEOUT, forward_once(server_addr, query)).await;
        match result {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(e)) => Err(DomainError::UpstreamUnavailable(e.to_string())),
            Err(_) => Err(DomainError::UpstreamUnavailable(format!(
                "timed out waiting for {server}"
            ))),
        }
    }

    fn add(&self, server: String) {
        self.servers.write().expect("upstream lock poisoned").push(server);
    }

    fn remove(&self, server: &str) {
        self.servers
            .write()
            .expect("upstream lock poisoned")
            .retain(|s| s != server);
    }

    fn list(&self) -> Vec<String> {
        self.servers.read().expect("upstream lock poisoned").clone()
    }
}

async fn forward_once(server: SocketAddr, query: &[u8]) -> std::io::Result<Vec<u8>> {
    let bind_addr = if server.is_ipv6() { "[::]:0" } else { "0.0.0.0:0" };
    let socket = UdpSocket::bind(bind_addr).await?;
    socket.send_to(query, server).await?;

    let mut buf = vec![0u8; MAX_RESPONSE_SIZE];
    loop {
        let (len, from) = socket.recv_from(&mut buf).await?;
        if from != server {
            warn!(expected = %server, got = %from, "discarding datagram from unexpected source");
            continue;
        }
        buf.truncate(len);
        return Ok(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_server_list_falls_back_to_default() {
        let pool = UpstreamPool::new(Vec::new());
        assert_eq!(pool.list(), vec![DEFAULT_UPSTREAM.to_string()]);
    }

    #[test]
    fn round_robin_cycles_through_all_servers() {
        let pool = UpstreamPool::new(vec![
            "1.1.1.1:53".to_string(),
            "8.8.8.8:53".to_string(),
            "9.9.9.9:53".to_string(),
        ]);
        let mut counts = std::collections::HashMap::new();
        for _ in 0..9 {
            *counts.entry(pool.next_server().unwrap()).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 3);
        for count in counts.values() {
            assert_eq!(*count, 3);
        }
    }

    #[test]
    fn add_and_remove_mutate_the_list() {
        let pool = UpstreamPool::new(vec!["1.1.1.1:53".to_string()]);
        pool.add("8.8.8.8:53".to_string());
        assert_eq!(pool.list().len(), 2);
        pool.remove("1.1.1.1:53");
        assert_eq!(pool.list(), vec!["8.8.8.8:53".to_string()]);
    }
}
