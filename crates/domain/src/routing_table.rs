use super::RecordSet;
use std::collections::HashMap;
use std::net::IpAddr;

/// Immutable name → [`RecordSet`] table.
///
/// Keys are the names exactly as written in the record file; lookups are
/// case-sensitive and do not add or strip a trailing dot.
#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    entries: HashMap<String, RecordSet>,
}

impl RoutingTable {
    pub fn lookup(&self, name: &str) -> Option<&RecordSet> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Accumulates records while a table is being loaded.
///
/// Every record set created by one builder shares the builder's TTL.
#[derive(Debug)]
pub struct RoutingTableBuilder {
    ttl: u32,
    entries: HashMap<String, RecordSet>,
}

impl RoutingTableBuilder {
    pub fn new(ttl: u32) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, address: IpAddr) {
        let ttl = self.ttl;
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| RecordSet::new(name, ttl))
            .push(address);
    }

    pub fn build(self) -> RoutingTable {
        RoutingTable {
            entries: self.entries,
        }
    }
}
