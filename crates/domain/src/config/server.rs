use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Transport spec, e.g. `udp:127.0.0.1:8053,tcp:127.0.0.1:8053`
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Idle timeout for TCP connections
    #[serde(default = "default_tcp_timeout_secs")]
    pub tcp_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            tcp_timeout_secs: default_tcp_timeout_secs(),
        }
    }
}

fn default_listen() -> String {
    "udp:127.0.0.1:8053".to_string()
}

fn default_tcp_timeout_secs() -> u64 {
    10
}
