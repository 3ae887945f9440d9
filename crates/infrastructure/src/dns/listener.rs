use crate::dns::server::RecordTableHandler;
use hickory_server::ServerFuture;
use socket2::{Domain, Protocol, Socket, Type};
use static_dns_domain::{AddressFamily, DomainError, Endpoint, SocketKind, Transport};
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::{lookup_host, TcpListener, UdpSocket};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Port used when a bind address names no port.
pub const DEFAULT_DNS_PORT: u16 = 53;

enum BoundSocket {
    Udp(UdpSocket),
    Tcp(TcpListener),
}

/// A socket bound for one endpoint, not yet serving.
pub struct Listener {
    endpoint: Endpoint,
    transport: Transport,
    socket: BoundSocket,
}

impl Listener {
    pub async fn bind(endpoint: &Endpoint) -> Result<Self, DomainError> {
        let transport = endpoint.transport()?;
        let addr = resolve_bind_address(&endpoint.bind_address, transport.family()).await?;

        let listen_error = |e: io::Error| DomainError::Listen {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        };

        let socket = match transport.kind() {
            SocketKind::Datagram => {
                BoundSocket::Udp(create_udp_socket(addr, transport.family()).map_err(listen_error)?)
            }
            SocketKind::Stream => BoundSocket::Tcp(
                create_tcp_listener(addr, transport.family()).map_err(listen_error)?,
            ),
        };

        debug!(endpoint = %endpoint, bind_address = %addr, "Socket bound");

        Ok(Self {
            endpoint: endpoint.clone(),
            transport,
            socket,
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn transport(&self) -> Transport {
        self.transport
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        match &self.socket {
            BoundSocket::Udp(socket) => socket.local_addr(),
            BoundSocket::Tcp(listener) => listener.local_addr(),
        }
    }

    /// Serves queries until the serve loop ends or `shutdown` is cancelled.
    ///
    /// On cancellation the server stops accepting and drains in-flight
    /// requests; a failure there is reported as [`DomainError::Shutdown`].
    pub async fn serve(
        self,
        handler: RecordTableHandler,
        tcp_timeout: Duration,
        shutdown: CancellationToken,
    ) -> Result<(), DomainError> {
        let endpoint = self.endpoint.to_string();
        let mut server = ServerFuture::new(handler);

        match self.socket {
            BoundSocket::Udp(socket) => server.register_socket(socket),
            BoundSocket::Tcp(listener) => server.register_listener(listener, tcp_timeout),
        }

        let finished = tokio::select! {
            result = server.block_until_done() => Some(result),
            _ = shutdown.cancelled() => None,
        };

        match finished {
            Some(result) => result.map_err(|e| DomainError::Listen {
                endpoint,
                reason: e.to_string(),
            }),
            None => {
                info!(endpoint = %endpoint, "Draining listener");
                server
                    .shutdown_gracefully()
                    .await
                    .map_err(|e| DomainError::Shutdown {
                        endpoint,
                        reason: e.to_string(),
                    })
            }
        }
    }
}

/// Resolves a bind address to a socket address of the requested family.
///
/// Accepted forms: `ip:port`, `[ipv6]:port`, a bare IP or `[ipv6]`
/// (port 53), `:port` or an empty string (unspecified address), and
/// `host[:port]` looked up through the system resolver.
pub async fn resolve_bind_address(
    address: &str,
    family: AddressFamily,
) -> Result<SocketAddr, DomainError> {
    let invalid = |reason: String| DomainError::InvalidBindAddress {
        address: address.to_string(),
        reason,
    };

    let candidates: Vec<SocketAddr> = if let Ok(addr) = address.parse::<SocketAddr>() {
        vec![addr]
    } else if let Some(ip) = parse_bare_ip(address) {
        vec![SocketAddr::new(ip, DEFAULT_DNS_PORT)]
    } else if address.is_empty() || address.starts_with(':') {
        let port = match address.get(1..) {
            Some(port) if !port.is_empty() => port
                .parse::<u16>()
                .map_err(|_| invalid(format!("invalid port {:?}", port)))?,
            _ => DEFAULT_DNS_PORT,
        };
        vec![SocketAddr::new(unspecified(family), port)]
    } else {
        let host_port = if has_port(address) {
            address.to_string()
        } else {
            format!("{}:{}", address, DEFAULT_DNS_PORT)
        };
        lookup_host(host_port)
            .await
            .map_err(|e| invalid(e.to_string()))?
            .collect()
    };

    candidates
        .into_iter()
        .find(|addr| family.matches(&addr.ip()))
        .ok_or_else(|| invalid(format!("no address usable for {:?} transport", family)))
}

fn parse_bare_ip(address: &str) -> Option<IpAddr> {
    let inner = address
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(address);
    inner.parse().ok()
}

fn has_port(address: &str) -> bool {
    address
        .rsplit_once(':')
        .is_some_and(|(_, port)| port.parse::<u16>().is_ok())
}

fn unspecified(family: AddressFamily) -> IpAddr {
    match family {
        AddressFamily::V6 => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        AddressFamily::Any | AddressFamily::V4 => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
    }
}

fn socket_domain(addr: SocketAddr) -> Domain {
    if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    }
}

fn create_udp_socket(addr: SocketAddr, family: AddressFamily) -> io::Result<UdpSocket> {
    let socket = Socket::new(socket_domain(addr), Type::DGRAM, Some(Protocol::UDP))?;
    if addr.is_ipv6() {
        socket.set_only_v6(family == AddressFamily::V6)?;
    }
    socket.bind(&addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}

fn create_tcp_listener(addr: SocketAddr, family: AddressFamily) -> io::Result<TcpListener> {
    let socket = Socket::new(socket_domain(addr), Type::STREAM, Some(Protocol::TCP))?;
    if addr.is_ipv6() {
        socket.set_only_v6(family == AddressFamily::V6)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
