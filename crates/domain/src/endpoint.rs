use super::DomainError;
use std::collections::BTreeMap;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// One listen target, as written in the transport spec.
///
/// The protocol is kept as text: an unknown name is only rejected when the
/// listener tries to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub protocol: String,
    pub bind_address: String,
}

impl Endpoint {
    pub fn new(protocol: impl Into<String>, bind_address: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            bind_address: bind_address.into(),
        }
    }

    pub fn transport(&self) -> Result<Transport, DomainError> {
        self.protocol.parse()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.protocol, self.bind_address)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketKind {
    Stream,
    Datagram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    Any,
    V4,
    V6,
}

impl AddressFamily {
    pub fn matches(&self, ip: &IpAddr) -> bool {
        match self {
            AddressFamily::Any => true,
            AddressFamily::V4 => ip.is_ipv4(),
            AddressFamily::V6 => ip.is_ipv6(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    Tcp,
    Tcp4,
    Tcp6,
    Udp,
    Udp4,
    Udp6,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Tcp => "tcp",
            Transport::Tcp4 => "tcp4",
            Transport::Tcp6 => "tcp6",
            Transport::Udp => "udp",
            Transport::Udp4 => "udp4",
            Transport::Udp6 => "udp6",
        }
    }

    pub fn kind(&self) -> SocketKind {
        match self {
            Transport::Tcp | Transport::Tcp4 | Transport::Tcp6 => SocketKind::Stream,
            Transport::Udp | Transport::Udp4 | Transport::Udp6 => SocketKind::Datagram,
        }
    }

    pub fn family(&self) -> AddressFamily {
        match self {
            Transport::Tcp | Transport::Udp => AddressFamily::Any,
            Transport::Tcp4 | Transport::Udp4 => AddressFamily::V4,
            Transport::Tcp6 | Transport::Udp6 => AddressFamily::V6,
        }
    }
}

impl FromStr for Transport {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Transport::Tcp),
            "tcp4" => Ok(Transport::Tcp4),
            "tcp6" => Ok(Transport::Tcp6),
            "udp" => Ok(Transport::Udp),
            "udp4" => Ok(Transport::Udp4),
            "udp6" => Ok(Transport::Udp6),
            other => Err(DomainError::UnsupportedTransport(other.to_string())),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn trim_spec(s: &str) -> &str {
    s.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// Parses a transport spec such as `udp:127.0.0.1:8053,tcp`.
///
/// Tokens are comma separated; each splits on its first `:` into protocol
/// and bind address, the address defaulting to [`DEFAULT_BIND_ADDRESS`].
/// A protocol named twice keeps its last address. Endpoints come back
/// ordered by protocol name. Never fails.
pub fn parse_transport_spec(spec: &str) -> Vec<Endpoint> {
    let mut by_protocol: BTreeMap<String, String> = BTreeMap::new();

    for token in trim_spec(spec).split(',') {
        let token = trim_spec(token);
        let (protocol, address) = match token.split_once(':') {
            Some((protocol, address)) => (protocol, address),
            None => (token, DEFAULT_BIND_ADDRESS),
        };
        by_protocol.insert(protocol.to_string(), address.to_string());
    }

    by_protocol
        .into_iter()
        .map(|(protocol, bind_address)| Endpoint {
            protocol,
            bind_address,
        })
        .collect()
}
