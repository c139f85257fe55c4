use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhitelistConfig {
    /// Seed whitelist entries loaded at startup, in addition to whatever
    /// the database collaborator supplies.
    #[serde(default)]
    pub domains: Vec<String>,
}
