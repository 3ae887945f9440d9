pub mod dns_client;
pub mod test_server;

pub use dns_client::{query_tcp, query_udp};
pub use test_server::TestDnsServer;
