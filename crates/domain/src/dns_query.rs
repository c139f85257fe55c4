use crate::RecordType;
use std::net::SocketAddr;
use std::sync::Arc;

/// A decoded question extracted from an inbound datagram, paired with the
/// transaction ID and client address needed to answer it. Only the first
/// question of a multi-question message is carried here; the Listener is
/// responsible for echoing the rest of the wire message untouched.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub id: u16,
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub client: SocketAddr,
    /// The full wire-format bytes of the inbound datagram, forwarded
    /// verbatim to upstream on a cache miss / allow decision.
    pub raw: Arc<[u8]>,
}

impl DnsQuery {
    /// The cache/filter lookup key: normalized name paired with record type.
    pub fn cache_key(&self) -> CacheKey {
        CacheKey {
            name: self.name.clone(),
            record_type: self.record_type,
        }
    }
}

/// Key under which cached responses and filter decisions are indexed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub name: Arc<str>,
    pub record_type: RecordType,
}
