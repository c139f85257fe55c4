use crate::BlocklistSource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlocklistsConfig {
    #[serde(default)]
    pub sources: Vec<BlocklistSource>,
    /// Glob expression matching custom blocklist YAML files, e.g.
    /// `./configs/custom*.yaml`.
    pub custom_path: String,
    /// Hours between automatic `UpdateAll` runs.
    pub auto_update_interval_hours: u64,
}

impl Default for BlocklistsConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            custom_path: "./configs/custom*.yaml".to_string(),
            auto_update_interval_hours: 24,
        }
    }
}
