use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub dns_host: String,
    pub dns_port: u16,
    /// Ordered list of upstream `addr:port` resolvers.
    pub upstream_dns: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_host: "0.0.0.0".to_string(),
            dns_port: 53,
            upstream_dns: vec!["8.8.8.8:53".to_string()],
        }
    }
}
