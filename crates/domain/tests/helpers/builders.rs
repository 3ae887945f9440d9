#![allow(dead_code)]
use static_dns_domain::RecordSet;
use std::net::IpAddr;

pub struct RecordSetBuilder {
    name: String,
    ttl: u32,
    addresses: Vec<IpAddr>,
}

impl RecordSetBuilder {
    pub fn new() -> Self {
        Self {
            name: "a.example.".to_string(),
            ttl: 300,
            addresses: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.addresses.push(address.parse().unwrap());
        self
    }

    pub fn build(self) -> RecordSet {
        let mut set = RecordSet::new(self.name, self.ttl);
        for address in self.addresses {
            set.push(address);
        }
        set
    }
}
