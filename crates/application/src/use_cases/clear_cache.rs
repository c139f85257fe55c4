use crate::ports::CachePort;
use std::sync::Arc;

/// Admin-surface `ClearCache()`.
pub struct ClearCacheUseCase {
    cache: Arc<dyn CachePort>,
}

impl ClearCacheUseCase {
    pub fn new(cache: Arc<dyn CachePort>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) {
        self.cache.clear();
    }
}
