use std::time::Instant;

/// A prior upstream reply held in the cache: wire bytes, insertion time,
/// and the TTL that governed it. Treated as immutable once stored; callers
/// that read it out via `Cache::get` receive their own copy with the
/// transaction ID already substituted (see
/// `aegis_dns_infrastructure::dns::cache`).
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub wire_bytes: Vec<u8>,
    pub inserted_at: Instant,
    pub ttl: std::time::Duration,
}

impl CachedResponse {
    pub fn new(wire_bytes: Vec<u8>, ttl: std::time::Duration) -> Self {
        Self {
            wire_bytes,
            inserted_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.inserted_at) > self.ttl
    }
}
