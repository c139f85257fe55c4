use crate::ports::FilterPort;
use std::sync::Arc;

pub struct RemoveCustomUseCase {
    filter: Arc<dyn FilterPort>,
}

impl RemoveCustomUseCase {
    pub fn new(filter: Arc<dyn FilterPort>) -> Self {
        Self { filter }
    }

    pub fn execute(&self, domain: &str) {
        self.filter.remove_custom(domain);
    }
}
