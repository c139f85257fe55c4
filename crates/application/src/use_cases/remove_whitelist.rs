use crate::ports::FilterPort;
use std::sync::Arc;

pub struct RemoveWhitelistUseCase {
    filter: Arc<dyn FilterPort>,
}

impl RemoveWhitelistUseCase {
    pub fn new(filter: Arc<dyn FilterPort>) -> Self {
        Self { filter }
    }

    pub fn execute(&self, domain: &str) {
        self.filter.remove_whitelist(domain);
    }
}
