use static_dns_domain::{Endpoint, RoutingTable};
use static_dns_infrastructure::dns::{ListenerOrchestrator, RecordTableHandler};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Serves `table` on every endpoint until a termination signal arrives
/// or all listeners have failed.
pub async fn run_dns_listeners(
    endpoints: Vec<Endpoint>,
    table: Arc<RoutingTable>,
    tcp_timeout: Duration,
) {
    let handler = RecordTableHandler::new(table);
    let outcomes = ListenerOrchestrator::new(endpoints, handler)
        .with_tcp_timeout(tcp_timeout)
        .run()
        .await;

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!(
        listeners = outcomes.len(),
        failed, "DNS listeners finished"
    );
}
