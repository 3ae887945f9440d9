use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::records::RecordsConfig;
use super::server::ServerConfig;

/// Main configuration structure for static-dns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listen endpoints and TCP handling
    #[serde(default)]
    pub server: ServerConfig,

    /// Record file and TTL
    #[serde(default)]
    pub records: RecordsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. static-dns.toml in current directory
    /// 3. /etc/static-dns/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever was found.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("static-dns.toml").exists() {
            Self::from_file("static-dns.toml")?
        } else if std::path::Path::new("/etc/static-dns/config.toml").exists() {
            Self::from_file("/etc/static-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(listen) = overrides.listen {
            self.server.listen = listen;
        }
        if let Some(timeout) = overrides.tcp_timeout_secs {
            self.server.tcp_timeout_secs = timeout;
        }
        if let Some(path) = overrides.records_path {
            self.records.path = Some(path);
        }
        if let Some(ttl) = overrides.ttl {
            self.records.ttl = ttl;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.tcp_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "TCP timeout cannot be 0".to_string(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Log level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub listen: Option<String>,
    pub tcp_timeout_secs: Option<u64>,
    pub records_path: Option<String>,
    pub ttl: Option<u32>,
    pub log_level: Option<String>,
}
