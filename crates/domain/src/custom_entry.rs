use serde::{Deserialize, Serialize};

/// One entry of a custom blocklist YAML file: the user-editable form of a
/// manually blocked domain. Only `enabled` entries are folded into the
/// `custom` filter set on `ReloadCustom`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomEntry {
    pub domain: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub note: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

/// The on-disk shape of a custom blocklist YAML file:
/// `{version, last_updated, domains: [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomBlocklistFile {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub domains: Vec<CustomEntry>,
}
