use crate::ports::{CachePort, FilterPort};
use aegis_dns_domain::DomainError;
use std::sync::Arc;

/// Admin-surface `ReloadCustom() → count`. A successful reload
/// invalidates the cache so no query observes a response computed under
/// the old custom set.
pub struct ReloadCustomUseCase {
    filter: Arc<dyn FilterPort>,
    cache: Arc<dyn CachePort>,
}

impl ReloadCustomUseCase {
    pub fn new(filter: Arc<dyn FilterPort>, cache: Arc<dyn CachePort>) -> Self {
        Self { filter, cache }
    }

    pub async fn execute(&self) -> Result<usize, DomainError> {
        let count = self.filter.reload_custom().await?;
        self.cache.clear();
        Ok(count)
    }
}
