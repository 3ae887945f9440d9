#![allow(dead_code)]
use static_dns_domain::{DomainError, Endpoint, RoutingTableBuilder};
use static_dns_infrastructure::dns::{Listener, RecordTableHandler};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// A real listener on an ephemeral loopback port serving a fixed table.
pub struct TestDnsServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    task: JoinHandle<Result<(), DomainError>>,
}

impl TestDnsServer {
    pub async fn start(protocol: &str, records: &[(&str, &str)], ttl: u32) -> Self {
        let mut builder = RoutingTableBuilder::new(ttl);
        for (name, address) in records {
            builder.insert(name, address.parse().unwrap());
        }
        let handler = RecordTableHandler::new(Arc::new(builder.build()));

        let listener = Listener::bind(&Endpoint::new(protocol, "127.0.0.1:0"))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = CancellationToken::new();
        let task = tokio::spawn(listener.serve(
            handler,
            Duration::from_secs(5),
            shutdown.clone(),
        ));

        Self {
            addr,
            shutdown,
            task,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub async fn stop(self) -> Result<(), DomainError> {
        self.shutdown.cancel();
        self.task.await.unwrap()
    }
}
