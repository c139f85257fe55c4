use super::parse::parse_list_text;
use super::schedule::is_restricted_strict;
use super::whitelist::is_whitelisted;
use aegis_dns_application::ports::FilterPort;
use aegis_dns_domain::config::filtering::ScheduleConfig;
use aegis_dns_domain::{domain_name, BlocklistSource, CustomBlocklistFile, DomainError};
use async_trait::async_trait;
use rustc_hash::FxHashSet;
use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::RwLock;
use std::time::Duration;
use tracing::{info, warn};

/// `remote`/`custom` use `FxHashSet` rather than the standard hasher: these
/// sets can hold millions of entries and sit on the query hot path's
/// suffix-match loop, where `rustc-hash`'s non-cryptographic hash
/// measurably outperforms SipHash. `whitelist` stays on the standard
/// hasher — it is small and never the bottleneck.
struct FilterState {
    remote: FxHashSet<String>,
    custom: FxHashSet<String>,
    whitelist: HashSet<String>,
}

/// Holds the whitelist, remote blocklist, and custom blocklist sets behind
/// a single reader/writer lock: the query path reads all three together,
/// so they are guarded together.
pub struct FilterEngine {
    state: RwLock<FilterState>,
    sources: Vec<BlocklistSource>,
    custom_glob: String,
    schedule: ScheduleConfig,
    http_client: reqwest::Client,
}

impl FilterEngine {
    pub fn new(
        sources: Vec<BlocklistSource>,
        custom_glob: String,
        schedule: ScheduleConfig,
        seed_whitelist: Vec<String>,
    ) -> Self {
        let whitelist = seed_whitelist.iter().map(|d| domain_name::normalize(d)).collect();
        Self {
            state: RwLock::new(FilterState {
                remote: FxHashSet::default(),
                custom: FxHashSet::default(),
                whitelist,
            }),
            sources,
            custom_glob,
            schedule,
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .expect("reqwest client builds"),
        }
    }

    /// Step 4.3.5: hierarchical suffix match against `custom ∪ remote`.
    fn matches_block_set(&self, normalized: &str) -> bool {
        let state = self.state.read().expect("filter lock poisoned");
        if state.custom.contains(normalized) || state.remote.contains(normalized) {
            return true;
        }
        domain_name::parent_suffixes(normalized)
            .any(|suffix| state.custom.contains(suffix) || state.remote.contains(suffix))
    }

    async fn fetch_source(&self, source: &BlocklistSource) -> Result<String, DomainError> {
        if let Some(path) = source.file_path() {
            return tokio::fs::read_to_string(path)
                .await
                .map_err(|e| DomainError::BlocklistFetchFailure {
                    source: source.name.clone(),
                    reason: e.to_string(),
                });
        }
        self.http_client
            .get(&source.url)
            .send()
            .await
            .map_err(|e| DomainError::BlocklistFetchFailure {
                source: source.name.clone(),
                reason: e.to_string(),
            })?
            .text()
            .await
            .map_err(|e| DomainError::BlocklistFetchFailure {
                source: source.name.clone(),
                reason: e.to_string(),
            })
    }

    async fn load_custom_files(&self) -> Vec<String> {
        let mut domains = Vec::new();
        let pattern = match glob::glob(&self.custom_glob) {
            Ok(paths) => paths,
            Err(e) => {
                warn!(pattern = %self.custom_glob, error = %e, "invalid custom blocklist glob");
                return domains;
            }
        };

        for entry in pattern {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!(error = %e, "failed to read glob entry");
                    continue;
                }
            };
            let contents = match tokio::fs::read_to_string(&path).await {
                Ok(contents) => contents,
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "failed to read custom blocklist file");
                    continue;
                }
            };
            let parsed: CustomBlocklistFile = match serde_yaml::from_str(&contents) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "failed to parse custom blocklist file");
                    continue;
                }
            };
            for entry in parsed.domains.into_iter().filter(|e| e.enabled) {
                domains.push(domain_name::normalize(&entry.domain));
            }
        }
        domains
    }
}

#[async_trait]
impl FilterPort for FilterEngine {
    fn should_block(&self, name: &str, _client: IpAddr) -> bool {
        let normalized = domain_name::normalize(name);
        if normalized.is_empty() {
            return false;
        }

        let is_whitelisted = {
            let state = self.state.read().expect("filter lock poisoned");
            is_whitelisted(&state.whitelist, &normalized)
        };
        if is_whitelisted {
            return false;
        }

        if is_restricted_strict(&self.schedule) {
            return true;
        }

        self.matches_block_set(&normalized)
    }

    async fn update_all(&self) -> Result<usize, DomainError> {
        let enabled_sources: Vec<&BlocklistSource> =
            self.sources.iter().filter(|s| s.enabled).collect();

        let fetches = enabled_sources.iter().map(|source| async move {
            match self.fetch_source(source).await {
                Ok(body) => Some(parse_list_text(&body).collect::<Vec<_>>()),
                Err(e) => {
                    warn!(source = %source.name, error = %e, "blocklist source failed, skipping");
                    None
                }
            }
        });
        let results = drive_sequentially(fetches).await;

        let mut new_remote: FxHashSet<String> = FxHashSet::default();
        for domains in results.into_iter().flatten() {
            new_remote.extend(domains);
        }

        // UpdateAll also folds the custom YAML sources into the rebuilt
        // remote set, in addition to the separately-maintained `custom`
        // set mutated by ReloadCustom/AddCustom/RemoveCustom.
        new_remote.extend(self.load_custom_files().await);

        if new_remote.is_empty() && enabled_sources.is_empty() {
            info!("update_all: no enabled remote sources configured");
        }

        let total = {
            let mut state = self.state.write().expect("filter lock poisoned");
            state.remote = new_remote;
            state.remote.len() + state.custom.len()
        };
        Ok(total)
    }

    async fn reload_custom(&self) -> Result<usize, DomainError> {
        let domains = self.load_custom_files().await;
        let count = domains.len();
        let mut state = self.state.write().expect("filter lock poisoned");
        state.custom = domains.into_iter().collect();
        Ok(count)
    }

    fn add_whitelist(&self, domain: &str) {
        let mut state = self.state.write().expect("filter lock poisoned");
        state.whitelist.insert(domain_name::normalize(domain));
    }

    fn remove_whitelist(&self, domain: &str) {
        let mut state = self.state.write().expect("filter lock poisoned");
        state.whitelist.remove(&domain_name::normalize(domain));
    }

    fn whitelist(&self) -> Vec<String> {
        self.state
            .read()
            .expect("filter lock poisoned")
            .whitelist
            .iter()
            .cloned()
            .collect()
    }

    fn add_custom(&self, domain: &str) {
        let mut state = self.state.write().expect("filter lock poisoned");
        state.custom.insert(domain_name::normalize(domain));
    }

    fn remove_custom(&self, domain: &str) {
        let mut state = self.state.write().expect("filter lock poisoned");
        state.custom.remove(&domain_name::normalize(domain));
    }

    fn custom(&self) -> Vec<String> {
        self.state
            .read()
            .expect("filter lock poisoned")
            .custom
            .iter()
            .cloned()
            .collect()
    }

    fn blocked_domain_count(&self) -> usize {
        let state = self.state.read().expect("filter lock poisoned");
        state.remote.len() + state.custom.len()
    }
}

/// Fetches each source one after another rather than pulling in a
/// futures-combinator crate just for a join — `update_all` already runs
/// off the query hot path, so total wall-clock here is not latency
/// sensitive the way it would be for a per-query operation.
async fn drive_sequentially<I>(iter: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: std::future::Future,
{
    let futures: Vec<_> = iter.into_iter().collect();
    let mut results = Vec::with_capacity(futures.len());
    for future in futures {
        results.push(future.await);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_dns_domain::config::filtering::ScheduleConfig;

    fn engine() -> FilterEngine {
        FilterEngine::new(
            Vec::new(),
            "./does-not-exist/*.yaml".to_string(),
            ScheduleConfig::default(),
            Vec::new(),
        )
    }

    #[test]
    fn empty_name_is_never_blocked() {
        let engine = engine();
        assert!(!engine.should_block("", "127.0.0.1".parse().unwrap()));
    }

    #[test]
    fn custom_entry_blocks_exact_name() {
        let engine = engine();
        engine.add_custom("ads.example");
        assert!(engine.should_block("ads.example", "127.0.0.1".parse().unwrap()));
    }

    #[test]
    fn hierarchical_suffix_blocks_subdomain() {
        let engine = engine();
        engine.add_custom("doubleclick.net");
        assert!(engine.should_block(
            "tracker.ads.doubleclick.net",
            "127.0.0.1".parse().unwrap()
        ));
    }

    #[test]
    fn whitelist_vetoes_block() {
        let engine = engine();
        engine.add_custom("example.com");
        engine.add_whitelist("*.example.com");
        assert!(!engine.should_block("www.example.com", "127.0.0.1".parse().unwrap()));
    }

    #[test]
    fn whitelist_wildcard_does_not_cover_the_bare_parent_domain() {
        // spec.md §8 scenario 4's "Testable edge case": `*.example.com`
        // does not whitelist the bare `example.com` itself, so the
        // blocked parent domain still blocks.
        let engine = engine();
        engine.add_custom("example.com");
        engine.add_whitelist("*.example.com");
        assert!(engine.should_block("example.com", "127.0.0.1".parse().unwrap()));
    }

    #[test]
    fn add_custom_is_idempotent() {
        let engine = engine();
        engine.add_custom("foo.test");
        engine.add_custom("foo.test");
        assert_eq!(engine.custom().len(), 1);
    }
}
