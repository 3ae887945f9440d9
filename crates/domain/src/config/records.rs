use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordsConfig {
    /// Tab separated `<name>\t<ip>` file
    #[serde(default)]
    pub path: Option<String>,

    /// TTL attached to every answer
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            path: None,
            ttl: default_ttl(),
        }
    }
}

fn default_ttl() -> u32 {
    300
}
