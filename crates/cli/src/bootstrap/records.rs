use static_dns_application::use_cases::LoadRecordsUseCase;
use static_dns_domain::{DomainError, RoutingTable};
use static_dns_infrastructure::records::RecordFile;
use std::sync::Arc;
use tracing::info;

pub fn load_routing_table(path: &str, ttl: u32) -> Result<RoutingTable, DomainError> {
    info!(path, ttl, "Loading record file");
    LoadRecordsUseCase::new(Arc::new(RecordFile::new(path)), ttl).execute()
}
