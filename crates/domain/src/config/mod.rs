//! Configuration value consumed by the core.
//!
//! Loading this from a file or the command line is a management-plane
//! concern that lives outside this workspace; what lives here is the
//! already-validated, strongly-typed value the core reads from on the hot
//! path and at job-scheduling time.

pub mod blocklists;
pub mod cache;
pub mod filtering;
pub mod server;
pub mod whitelist;

pub use blocklists::BlocklistsConfig;
pub use cache::CacheConfig;
pub use filtering::FilteringConfig;
pub use server::ServerConfig;
pub use whitelist::WhitelistConfig;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub filtering: FilteringConfig,
    #[serde(default)]
    pub blocklists: BlocklistsConfig,
    #[serde(default)]
    pub whitelist: WhitelistConfig,
}
