use aegis_dns_domain::{BlockAction, DnsQuery};
use std::net::Ipv4Addr;

/// Everything the Pipeline needs to turn a decision into wire bytes,
/// without knowing the wire format itself. The concrete implementation in
/// `infrastructure` is the only place `hickory-proto` types appear outside
/// the Listener's own decode step.
pub trait WireCodecPort: Send + Sync {
    /// Overwrite the transaction ID of a cached/previously-built reply
    /// with the incoming query's ID. Operates on a copy; never mutates a
    /// shared buffer.
    fn substitute_transaction_id(&self, wire_bytes: &[u8], id: u16) -> Vec<u8>;

    /// Build the blocked-answer reply: question echoed, `qr=1`, `aa=1`,
    /// and an rcode/answer section per `action`.
    fn build_block_response(
        &self,
        query: &DnsQuery,
        action: BlockAction,
        redirect_ip: Ipv4Addr,
    ) -> Vec<u8>;

    /// Build a SERVFAIL reply for `query`, used when the upstream pool
    /// returns an error.
    fn build_servfail(&self, query: &DnsQuery) -> Vec<u8>;

    /// Build the minimal empty reply (question echoed if any, no answers,
    /// `rcode=NOERROR`) used for malformed or zero-question datagrams.
    fn build_empty_reply(&self, raw_query: &[u8]) -> Vec<u8>;
}
