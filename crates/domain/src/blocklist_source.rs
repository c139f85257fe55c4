use serde::{Deserialize, Serialize};

/// A configured remote blocklist feed: a name, a location (an `http(s)://`
/// URL or a `file://` path), a free-form category tag, and whether it
/// currently participates in `UpdateAll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlocklistSource {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl BlocklistSource {
    pub fn file_path(&self) -> Option<&str> {
        self.url.strip_prefix("file://")
    }
}
