use crate::{BlockAction, ScheduleRule};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteringConfig {
    pub enabled: bool,
    pub block_action: BlockAction,
    pub redirect_ip: Ipv4Addr,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl Default for FilteringConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            block_action: BlockAction::default(),
            redirect_ip: Ipv4Addr::new(0, 0, 0, 0),
            schedule: ScheduleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub rules: Vec<ScheduleRule>,
}
