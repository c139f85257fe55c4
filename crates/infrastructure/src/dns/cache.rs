//! Bounded response cache.
//!
//! A single `RwLock<HashMap<...>>` backs the whole store: one
//! reader/writer-exclusive critical section for the cache. `Set` may evict
//! the oldest-by-insertion entry when the map is at capacity; `Clear`
//! replaces the map outright so no reader can ever observe a pre-Clear
//! entry afterward.

use aegis_dns_application::ports::CachePort;
use aegis_dns_domain::{CacheKey, CachedResponse};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

pub struct ResponseCache {
    entries: RwLock<HashMap<CacheKey, CachedResponse>>,
    max_size: usize,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_size,
            ttl,
        }
    }

    /// Removes every entry whose insertion time is older than `ttl`. Run
    /// periodically by the cache-cleaner background job, never on the
    /// query hot path.
    pub fn sweep_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().expect("cache lock poisoned");
        let before = entries.len();
        entries.retain(|_, response| !response.is_expired(now));
        before - entries.len()
    }
}

impl CachePort for ResponseCache {
    fn get(&self, key: &CacheKey) -> Option<Vec<u8>> {
        let entries = self.entries.read().expect("cache lock poisoned");
        let response = entries.get(key)?;
        if response.is_expired(Instant::now()) {
            return None;
        }
        Some(response.wire_bytes.clone())
    }

    fn set(&self, key: CacheKey, wire_bytes: Vec<u8>) {
        let mut entries = self.entries.write().expect("cache lock poisoned");
        if entries.len() >= self.max_size && !entries.contains_key(&key) {
            if let Some(oldest_key) = entries
                .iter()
                .min_by_key(|(_, response)| response.inserted_at)
                .map(|(k, _)| k.clone())
            {
                entries.remove(&oldest_key);
            }
        }
        entries.insert(key, CachedResponse::new(wire_bytes, self.ttl));
    }

    fn clear(&self) {
        let mut entries = self.entries.write().expect("cache lock poisoned");
        *entries = HashMap::new();
    }

    fn size(&self) -> usize {
        self.entries.read().expect("cache lock poisoned").len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_dns_domain::RecordType;
    use std::sync::Arc;

    fn key(name: &str) -> CacheKey {
        CacheKey {
            name: Arc::from(name),
            record_type: RecordType::A,
        }
    }

    #[test]
    fn get_after_set_returns_copy() {
        let cache = ResponseCache::new(10, Duration::from_secs(60));
        cache.set(key("example.com"), vec![1, 2, 3]);
        assert_eq!(cache.get(&key("example.com")), Some(vec![1, 2, 3]));
    }

    #[test]
    fn clear_empties_the_store() {
        let cache = ResponseCache::new(10, Duration::from_secs(60));
        cache.set(key("example.com"), vec![1]);
        cache.clear();
        assert_eq!(cache.size(), 0);
        assert_eq!(cache.get(&key("example.com")), None);
    }

    #[test]
    fn eviction_drops_oldest_entry_at_capacity() {
        let cache = ResponseCache::new(2, Duration::from_secs(60));
        cache.set(key("a.com"), vec![1]);
        std::thread::sleep(Duration::from_millis(5));
        cache.set(key("b.com"), vec![2]);
        std::thread::sleep(Duration::from_millis(5));
        cache.set(key("c.com"), vec![3]);
        assert_eq!(cache.size(), 2);
        assert_eq!(cache.get(&key("a.com")), None);
        assert!(cache.get(&key("b.com")).is_some());
        assert!(cache.get(&key("c.com")).is_some());
    }

    #[test]
    fn expired_entry_is_not_returned() {
        let cache = ResponseCache::new(10, Duration::from_millis(1));
        cache.set(key("example.com"), vec![1]);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.get(&key("example.com")), None);
    }
}
