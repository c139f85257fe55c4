use crate::ports::{CachePort, FilterPort, UpstreamPort, WireCodecPort};
use aegis_dns_domain::{BlockAction, DnsQuery, Stats};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, info};

/// Per-query configuration the Pipeline consults on every call. Cheap to
/// copy; the `cli` bootstrap builds one from the validated `Config` value
/// and hands a clone to every worker task.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    pub filtering_enabled: bool,
    pub block_action: BlockAction,
    pub redirect_ip: Ipv4Addr,
    pub query_logging_enabled: bool,
}

/// Per-query orchestration: cache → filter → upstream. The only component
/// that mutates statistics and the only component that writes to the
/// cache.
pub struct Pipeline {
    cache: Arc<dyn CachePort>,
    filter: Arc<dyn FilterPort>,
    upstream: Arc<dyn UpstreamPort>,
    codec: Arc<dyn WireCodecPort>,
    stats: Arc<Stats>,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(
        cache: Arc<dyn CachePort>,
        filter: Arc<dyn FilterPort>,
        upstream: Arc<dyn UpstreamPort>,
        codec: Arc<dyn WireCodecPort>,
        stats: Arc<Stats>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            cache,
            filter,
            upstream,
            codec,
            stats,
            config,
        }
    }

    /// Runs one query through the full pipeline and returns the wire bytes
    /// to send back to the client. Never returns an error: every path
    /// resolves to a concrete reply.
    pub async fn handle(&self, query: DnsQuery) -> Vec<u8> {
        self.stats.incr_total();

        if self.config.query_logging_enabled {
            debug!(
                name = %query.name,
                client = %query.client,
                qtype = %query.record_type,
                "query"
            );
        }

        let key = query.cache_key();
        if let Some(hit) = self.cache.get(&key) {
            self.stats.incr_cached();
            return self.codec.substitute_transaction_id(&hit, query.id);
        }

        if self.config.filtering_enabled
            && self.filter.should_block(&query.name, query.client.ip())
        {
            self.stats.incr_blocked();
            info!(name = %query.name, client = %query.client, "block");
            return self
                .codec
                .build_block_response(&query, self.config.block_action, self.config.redirect_ip);
        }

        match self.upstream.forward(&query.raw).await {
            Ok(response) => {
                if is_cacheable(&response) {
                    self.cache.set(key, response.clone());
                }
                response
            }
            Err(err) => {
                debug!(name = %query.name, error = %err, "upstream forward failed");
                self.codec.build_servfail(&query)
            }
        }
    }
}

/// Cache-insertion rule: only upstream successes with `rcode=NOERROR` and
/// a non-empty answer section are cached — a synthesized block response
/// is never stored.
fn is_cacheable(wire_bytes: &[u8]) -> bool {
    // Header layout (RFC 1035 §4.1.1): byte 3 low nibble is RCODE, bytes
    // 6-7 are ANCOUNT.
    if wire_bytes.len() < 12 {
        return false;
    }
    let rcode = wire_bytes[3] & 0x0F;
    let ancount = u16::from_be_bytes([wire_bytes[6], wire_bytes[7]]);
    rcode == 0 && ancount > 0
}
