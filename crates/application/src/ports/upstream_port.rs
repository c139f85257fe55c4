use aegis_dns_domain::DomainError;
use async_trait::async_trait;

/// Round-robin pool of upstream resolvers and the verbatim forward
/// operation against whichever one `next()` picks.
#[async_trait]
pub trait UpstreamPort: Send + Sync {
    /// Send `query` bytes verbatim to the next server in rotation and
    /// return the raw response bytes. Bounded by a 5 s timeout internally.
    async fn forward(&self, query: &[u8]) -> Result<Vec<u8>, DomainError>;

    fn add(&self, server: String);
    fn remove(&self, server: &str);
    fn list(&self) -> Vec<String>;
}
