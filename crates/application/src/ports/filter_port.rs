use aegis_dns_domain::DomainError;
use async_trait::async_trait;
use std::net::IpAddr;

/// The Filter Engine seam. Hot-path decisions (`should_block`) are
/// synchronous — the engine's state lives entirely in memory behind a
/// single reader/writer lock. Only the ingestion operations are async,
/// since they perform HTTP fetch / file I/O.
#[async_trait]
pub trait FilterPort: Send + Sync {
    /// Decide whether `name` should be blocked for `client`: whitelist,
    /// schedule, remote set, then custom set, in that order.
    fn should_block(&self, name: &str, client: IpAddr) -> bool;

    /// Rebuild `remote` from all enabled remote sources and merge custom
    /// YAML sources in, replacing `remote` atomically. Returns the total
    /// blocked-domain count (`|remote| + |custom|`) after the swap.
    async fn update_all(&self) -> Result<usize, DomainError>;

    /// Reload `custom` from the configured glob, replacing it in place.
    /// Returns the number of enabled entries loaded.
    async fn reload_custom(&self) -> Result<usize, DomainError>;

    fn add_whitelist(&self, domain: &str);
    fn remove_whitelist(&self, domain: &str);
    fn whitelist(&self) -> Vec<String>;

    fn add_custom(&self, domain: &str);
    fn remove_custom(&self, domain: &str);
    fn custom(&self) -> Vec<String>;

    /// `|remote| + |custom|`.
    fn blocked_domain_count(&self) -> usize;
}
