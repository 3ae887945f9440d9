use super::RecordType;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// All addresses configured for one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    name: String,

    ttl: u32,

    v4_addresses: Vec<Ipv4Addr>,

    v6_addresses: Vec<Ipv6Addr>,
}

/// Result of matching a query type against a [`RecordSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome<'a> {
    A { ttl: u32, addresses: &'a [Ipv4Addr] },
    AAAA { ttl: u32, addresses: &'a [Ipv6Addr] },
    /// Wrong query type, or no address of the requested family.
    Failed,
}

impl RecordSet {
    pub fn new(name: impl Into<String>, ttl: u32) -> Self {
        Self {
            name: name.into(),
            ttl,
            v4_addresses: Vec::with_capacity(1),
            v6_addresses: Vec::with_capacity(1),
        }
    }

    /// Appends an address to the list of its family.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) count as IPv4.
    /// Duplicates are kept.
    pub fn push(&mut self, address: IpAddr) {
        match address {
            IpAddr::V4(v4) => self.v4_addresses.push(v4),
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => self.v4_addresses.push(v4),
                None => self.v6_addresses.push(v6),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn v4_addresses(&self) -> &[Ipv4Addr] {
        &self.v4_addresses
    }

    pub fn v6_addresses(&self) -> &[Ipv6Addr] {
        &self.v6_addresses
    }

    pub fn select(&self, record_type: RecordType) -> QueryOutcome<'_> {
        match record_type {
            RecordType::A if !self.v4_addresses.is_empty() => QueryOutcome::A {
                ttl: self.ttl,
                addresses: &self.v4_addresses,
            },
            RecordType::AAAA if !self.v6_addresses.is_empty() => QueryOutcome::AAAA {
                ttl: self.ttl,
                addresses: &self.v6_addresses,
            },
            _ => QueryOutcome::Failed,
        }
    }
}

impl QueryOutcome<'_> {
    pub fn answer_count(&self) -> usize {
        match self {
            QueryOutcome::A { addresses, .. } => addresses.len(),
            QueryOutcome::AAAA { addresses, .. } => addresses.len(),
            QueryOutcome::Failed => 0,
        }
    }
}
