use aegis_dns_domain::CacheKey;

/// Response cache seam. The query path holds the only writer; the concrete
/// implementation lives in `infrastructure::dns::cache`.
pub trait CachePort: Send + Sync {
    /// Wire bytes of a prior upstream reply for `key`, if present and not
    /// expired. The returned bytes are the caller's own copy.
    fn get(&self, key: &CacheKey) -> Option<Vec<u8>>;

    /// Store a copy of `wire_bytes` under `key`. May evict the
    /// oldest-by-insertion entry first if the cache is at capacity.
    fn set(&self, key: CacheKey, wire_bytes: Vec<u8>);

    /// Replace the store with an empty one. After this returns, no
    /// subsequent `get` can return an entry inserted before the call.
    fn clear(&self);

    fn size(&self) -> usize;
}
