use aegis_dns_domain::{BlockAction, BlocklistSource, Config};
use std::net::Ipv4Addr;
use std::str::FromStr;
use tracing::info;

/// Builds the validated [`Config`] value the core consumes. File-based
/// config loading and CLI argument parsing are management-plane concerns
/// out of scope for this workspace; this applies only environment-variable
/// overrides on top of `Config::default()`, the one config surface left
/// in scope for a binary with no file-format parser.
pub fn load_config() -> Config {
    let mut config = Config::default();

    if let Some(host) = env_var("AEGIS_DNS_HOST") {
        config.server.dns_host = host;
    }
    if let Some(port) = env_parse("AEGIS_DNS_PORT") {
        config.server.dns_port = port;
    }
    if let Some(upstreams) = env_list("AEGIS_UPSTREAM_DNS") {
        config.server.upstream_dns = upstreams;
    }

    if let Some(size) = env_parse("AEGIS_CACHE_SIZE") {
        config.cache.max_size = size;
    }
    if let Some(ttl) = env_parse("AEGIS_CACHE_TTL_SECS") {
        config.cache.ttl_secs = ttl;
    }

    if let Some(enabled) = env_parse("AEGIS_FILTERING_ENABLED") {
        config.filtering.enabled = enabled;
    }
    if let Some(action) = env_var("AEGIS_BLOCK_ACTION").and_then(|v| parse_block_action(&v)) {
        config.filtering.block_action = action;
    }
    if let Some(ip) = env_var("AEGIS_REDIRECT_IP").and_then(|v| Ipv4Addr::from_str(&v).ok()) {
        config.filtering.redirect_ip = ip;
    }
    if let Some(enabled) = env_parse("AEGIS_SCHEDULE_ENABLED") {
        config.filtering.schedule.enabled = enabled;
    }

    if let Some(urls) = env_list("AEGIS_BLOCKLIST_SOURCES") {
        config.blocklists.sources = urls.into_iter().map(source_from_url).collect();
    }
    if let Some(path) = env_var("AEGIS_BLOCKLIST_CUSTOM_PATH") {
        config.blocklists.custom_path = path;
    }
    if let Some(hours) = env_parse("AEGIS_BLOCKLIST_AUTO_UPDATE_INTERVAL_HOURS") {
        config.blocklists.auto_update_interval_hours = hours;
    }

    if let Some(domains) = env_list("AEGIS_WHITELIST_DOMAINS") {
        config.whitelist.domains = domains;
    }

    info!(
        dns_host = %config.server.dns_host,
        dns_port = config.server.dns_port,
        upstream_count = config.server.upstream_dns.len(),
        filtering_enabled = config.filtering.enabled,
        remote_sources = config.blocklists.sources.len(),
        "configuration resolved"
    );

    config
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    env_var(name).and_then(|v| v.parse().ok())
}

fn env_list(name: &str) -> Option<Vec<String>> {
    let raw = env_var(name)?;
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

fn parse_block_action(raw: &str) -> Option<BlockAction> {
    match raw.to_ascii_lowercase().as_str() {
        "nxdomain" => Some(BlockAction::Nxdomain),
        "redirect" => Some(BlockAction::Redirect),
        "block_page" | "blockpage" => Some(BlockAction::BlockPage),
        _ => None,
    }
}

fn source_from_url(url: String) -> BlocklistSource {
    let name = url
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(&url)
        .to_string();
    BlocklistSource {
        name,
        url,
        category: "default".to_string(),
        enabled: true,
    }
}
