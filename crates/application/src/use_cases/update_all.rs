use crate::ports::{CachePort, FilterPort};
use aegis_dns_domain::DomainError;
use std::sync::Arc;

/// Admin-surface `UpdateAll()`. May be long-running; callers are expected
/// to start it asynchronously rather than block the admin request on it.
pub struct UpdateAllUseCase {
    filter: Arc<dyn FilterPort>,
    cache: Arc<dyn CachePort>,
}

impl UpdateAllUseCase {
    pub fn new(filter: Arc<dyn FilterPort>, cache: Arc<dyn CachePort>) -> Self {
        Self { filter, cache }
    }

    pub async fn execute(&self) -> Result<usize, DomainError> {
        let count = self.filter.update_all().await?;
        self.cache.clear();
        Ok(count)
    }
}
