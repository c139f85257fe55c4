//! End-to-end Pipeline behavior against fake ports: straight pass-through,
//! direct block, cache hit, and the cache-invalidation rule that follows a
//! reload.

use aegis_dns_application::ports::{CachePort, FilterPort, UpstreamPort, WireCodecPort};
use aegis_dns_application::{Pipeline, PipelineConfig};
use aegis_dns_domain::{BlockAction, CacheKey, DnsQuery, DomainError, RecordType, Stats};
use async_trait::async_trait;
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

struct FakeCache {
    entries: Mutex<HashMap<CacheKey, Vec<u8>>>,
}

impl FakeCache {
    fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl CachePort for FakeCache {
    fn get(&self, key: &CacheKey) -> Option<Vec<u8>> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: CacheKey, wire_bytes: Vec<u8>) {
        self.entries.lock().unwrap().insert(key, wire_bytes);
    }

    fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    fn size(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

struct FakeFilter {
    blocked: Mutex<Vec<String>>,
}

impl FakeFilter {
    fn new(blocked: &[&str]) -> Self {
        Self {
            blocked: Mutex::new(blocked.iter().map(|s| s.to_string()).collect()),
        }
    }
}

#[async_trait]
impl FilterPort for FakeFilter {
    fn should_block(&self, name: &str, _client: std::net::IpAddr) -> bool {
        self.blocked.lock().unwrap().iter().any(|b| b == name)
    }

    async fn update_all(&self) -> Result<usize, DomainError> {
        Ok(self.blocked.lock().unwrap().len())
    }

    async fn reload_custom(&self) -> Result<usize, DomainError> {
        Ok(self.blocked.lock().unwrap().len())
    }

    fn add_whitelist(&self, _domain: &str) {}
    fn remove_whitelist(&self, _domain: &str) {}
    fn whitelist(&self) -> Vec<String> {
        Vec::new()
    }

    fn add_custom(&self, domain: &str) {
        self.blocked.lock().unwrap().push(domain.to_string());
    }
    fn remove_custom(&self, domain: &str) {
        self.blocked.lock().unwrap().retain(|b| b != domain);
    }
    fn custom(&self) -> Vec<String> {
        self.blocked.lock().unwrap().clone()
    }

    fn blocked_domain_count(&self) -> usize {
        self.blocked.lock().unwrap().len()
    }
}

/// Counts forward calls so tests can assert upstream was (or wasn't)
/// consulted, and returns a fixed NOERROR/1-answer reply.
struct FakeUpstream {
    calls: AtomicUsize,
}

impl FakeUpstream {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl UpstreamPort for FakeUpstream {
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Minimal 12-byte header: transaction ID echoed, rcode=0, ancount=1.
        let mut reply = vec![0u8; 12];
        if query.len() >= 2 {
            reply[0..2].copy_from_slice(&query[0..2]);
        }
        reply[6..8].copy_from_slice(&1u16.to_be_bytes());
        Ok(reply)
    }

    fn add(&self, _server: String) {}
    fn remove(&self, _server: &str) {}
    fn list(&self) -> Vec<String> {
        Vec::new()
    }
}

struct FakeCodec;

impl WireCodecPort for FakeCodec {
    fn substitute_transaction_id(&self, wire_bytes: &[u8], id: u16) -> Vec<u8> {
        let mut copy = wire_bytes.to_vec();
        copy[0..2].copy_from_slice(&id.to_be_bytes());
        copy
    }

    fn build_block_response(
        &self,
        query: &DnsQuery,
        _action: BlockAction,
        _redirect_ip: Ipv4Addr,
    ) -> Vec<u8> {
        let mut reply = vec![0u8; 12];
        reply[0..2].copy_from_slice(&query.id.to_be_bytes());
        reply[3] = 3; // NXDOMAIN
        reply
    }

    fn build_servfail(&self, query: &DnsQuery) -> Vec<u8> {
        let mut reply = vec![0u8; 12];
        reply[0..2].copy_from_slice(&query.id.to_be_bytes());
        reply[3] = 2; // SERVFAIL
        reply
    }

    fn build_empty_reply(&self, raw_query: &[u8]) -> Vec<u8> {
        let mut reply = vec![0u8; 12];
        if raw_query.len() >= 2 {
            reply[0..2].copy_from_slice(&raw_query[0..2]);
        }
        reply
    }
}

fn query(id: u16, name: &str) -> DnsQuery {
    let mut raw = vec![0u8; 12];
    raw[0..2].copy_from_slice(&id.to_be_bytes());
    DnsQuery {
        id,
        name: Arc::from(name),
        record_type: RecordType::A,
        client: SocketAddr::from(([192, 168, 1, 50], 54321)),
        raw: Arc::from(raw.into_boxed_slice()),
    }
}

fn pipeline(
    cache: Arc<FakeCache>,
    filter: Arc<FakeFilter>,
    upstream: Arc<FakeUpstream>,
) -> Pipeline {
    Pipeline::new(
        cache,
        filter,
        upstream,
        Arc::new(FakeCodec),
        Arc::new(Stats::default()),
        PipelineConfig {
            filtering_enabled: true,
            block_action: BlockAction::Nxdomain,
            redirect_ip: Ipv4Addr::UNSPECIFIED,
            query_logging_enabled: false,
        },
    )
}

#[tokio::test]
async fn straight_pass_through_calls_upstream_and_caches() {
    let cache = Arc::new(FakeCache::new());
    let filter = Arc::new(FakeFilter::new(&["ads.example"]));
    let upstream = Arc::new(FakeUpstream::new());
    let p = pipeline(cache.clone(), filter, upstream.clone());

    let reply = p.handle(query(1, "www.google.com")).await;

    assert_eq!(upstream.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        cache.size(),
        1,
        "a NOERROR/1-answer upstream reply must be cached"
    );
    assert_eq!(u16::from_be_bytes([reply[0], reply[1]]), 1);
}

#[tokio::test]
async fn blocked_domain_returns_nxdomain_without_upstream_call() {
    let cache = Arc::new(FakeCache::new());
    let filter = Arc::new(FakeFilter::new(&["ads.example"]));
    let upstream = Arc::new(FakeUpstream::new());
    let p = pipeline(cache, filter, upstream.clone());

    let reply = p.handle(query(42, "ads.example")).await;

    assert_eq!(upstream.calls.load(Ordering::SeqCst), 0);
    assert_eq!(reply[3], 3, "expected NXDOMAIN rcode");
    assert_eq!(u16::from_be_bytes([reply[0], reply[1]]), 42);
}

#[tokio::test]
async fn second_identical_query_is_served_from_cache() {
    let cache = Arc::new(FakeCache::new());
    let filter = Arc::new(FakeFilter::new(&[]));
    let upstream = Arc::new(FakeUpstream::new());
    let p = pipeline(cache, filter, upstream.clone());

    let first = p.handle(query(1, "example.net")).await;
    let second = p.handle(query(2, "example.net")).await;

    assert_eq!(
        upstream.calls.load(Ordering::SeqCst),
        1,
        "second query must be served from cache, not upstream"
    );
    assert_eq!(u16::from_be_bytes([second[0], second[1]]), 2);
    assert_eq!(first[2..], second[2..], "cached body is unchanged");
}

#[tokio::test]
async fn clearing_cache_after_a_custom_block_addition_forces_a_block() {
    let cache = Arc::new(FakeCache::new());
    let filter = Arc::new(FakeFilter::new(&[]));
    let upstream = Arc::new(FakeUpstream::new());
    let p = pipeline(cache.clone(), filter.clone(), upstream.clone());

    let _ = p.handle(query(1, "foo.test")).await;
    assert_eq!(cache.size(), 1);

    filter.add_custom("foo.test");
    cache.clear();

    let reply = p.handle(query(2, "foo.test")).await;
    assert_eq!(reply[3], 3, "foo.test must now be blocked");
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 1);
}
