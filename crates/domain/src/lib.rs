//! static-dns domain layer
pub mod config;
pub mod endpoint;
pub mod errors;
pub mod record_set;
pub mod record_type;
pub mod routing_table;

pub use config::{CliOverrides, Config, ConfigError};
pub use endpoint::{parse_transport_spec, AddressFamily, Endpoint, SocketKind, Transport};
pub use errors::DomainError;
pub use record_set::{QueryOutcome, RecordSet};
pub use record_type::RecordType;
pub use routing_table::{RoutingTable, RoutingTableBuilder};
