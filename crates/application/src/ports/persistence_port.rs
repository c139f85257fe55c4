use aegis_dns_domain::DomainError;
use async_trait::async_trait;
use std::collections::HashSet;
use std::net::IpAddr;
use std::time::SystemTime;

/// The external database collaborator query logging and retention would
/// use. The core neither defines the schema nor performs retention; it
/// only invokes these operations. No implementation of this port ships in
/// this workspace — the management plane owns it.
#[async_trait]
pub trait PersistencePort: Send + Sync {
    async fn save_blocklist(&self, domains: &HashSet<String>) -> Result<(), DomainError>;
    async fn load_blocklist(&self) -> Result<HashSet<String>, DomainError>;
    async fn add_to_whitelist(&self, domain: &str) -> Result<(), DomainError>;
    async fn remove_from_whitelist(&self, domain: &str) -> Result<(), DomainError>;
    async fn log_blocked_query(
        &self,
        domain: &str,
        client_ip: IpAddr,
        at: SystemTime,
    ) -> Result<(), DomainError>;
}
