mod logging;
mod records;

pub use logging::init_logging;
pub use records::load_routing_table;

use static_dns_domain::{CliOverrides, Config, ConfigError};
use tracing::info;

/// No record file was named on the command line or in the config file.
#[derive(Debug, thiserror::Error)]
#[error("no record file given")]
pub struct UsageError;

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Config, ConfigError> {
    let config = Config::load(path, cli_overrides)?;
    config.validate()?;
    if let Some(path) = path {
        info!(path, "Configuration loaded");
    }
    Ok(config)
}
