use std::io::BufRead;
use std::net::IpAddr;
use std::sync::Arc;

use static_dns_domain::{DomainError, RoutingTable, RoutingTableBuilder};
use tracing::{debug, info};

use crate::ports::RecordSource;

/// Builds the routing table from `<name>\t<ip>` lines.
///
/// The first bad line aborts the whole load; no partial table is returned.
pub struct LoadRecordsUseCase {
    source: Arc<dyn RecordSource>,
    ttl: u32,
}

impl LoadRecordsUseCase {
    pub fn new(source: Arc<dyn RecordSource>, ttl: u32) -> Self {
        Self { source, ttl }
    }

    pub fn execute(&self) -> Result<RoutingTable, DomainError> {
        let path = self.source.name();
        let mut reader = self.source.open()?;
        let mut builder = RoutingTableBuilder::new(self.ttl);
        let mut buf = Vec::new();
        let mut line_no = 0usize;
        let mut records = 0usize;

        loop {
            line_no += 1;
            buf.clear();

            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| DomainError::RecordRead {
                    path: path.to_string(),
                    line: line_no,
                    reason: e.to_string(),
                })?;
            if read == 0 {
                break;
            }

            let line = std::str::from_utf8(strip_line_ending(&buf)).map_err(|e| {
                DomainError::RecordRead {
                    path: path.to_string(),
                    line: line_no,
                    reason: e.to_string(),
                }
            })?;

            let (name, address) = parse_record_line(path, line_no, line)?;
            builder.insert(name, address);
            records += 1;
        }

        let table = builder.build();
        debug!(path = %path, records, "Record file read");
        info!(
            path = %path,
            names = table.len(),
            ttl = self.ttl,
            "Routing table loaded"
        );

        Ok(table)
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Splits a record line on its first tab and parses the address part.
pub fn parse_record_line<'a>(
    path: &str,
    line_no: usize,
    line: &'a str,
) -> Result<(&'a str, IpAddr), DomainError> {
    let (name, address_text) = line
        .split_once('\t')
        .ok_or_else(|| DomainError::InvalidRecordLine {
            path: path.to_string(),
            line: line_no,
        })?;

    let address = address_text
        .parse::<IpAddr>()
        .map_err(|_| DomainError::InvalidRecordAddress {
            path: path.to_string(),
            line: line_no,
            value: address_text.to_string(),
        })?;

    Ok((name, address))
}
