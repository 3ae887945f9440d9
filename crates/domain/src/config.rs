pub mod errors;
pub mod logging;
pub mod records;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use records::RecordsConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
