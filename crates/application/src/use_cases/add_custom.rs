use crate::ports::FilterPort;
use std::sync::Arc;

/// `AddCustom(domain)`. Idempotent: adding the same domain twice leaves
/// `custom` in the same state as adding it once.
pub struct AddCustomUseCase {
    filter: Arc<dyn FilterPort>,
}

impl AddCustomUseCase {
    pub fn new(filter: Arc<dyn FilterPort>) -> Self {
        Self { filter }
    }

    pub fn execute(&self, domain: &str) {
        self.filter.add_custom(domain);
    }
}
