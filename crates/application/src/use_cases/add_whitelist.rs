use crate::ports::FilterPort;
use std::sync::Arc;

pub struct AddWhitelistUseCase {
    filter: Arc<dyn FilterPort>,
}

impl AddWhitelistUseCase {
    pub fn new(filter: Arc<dyn FilterPort>) -> Self {
        Self { filter }
    }

    pub fn execute(&self, domain: &str) {
        self.filter.add_whitelist(domain);
    }
}
