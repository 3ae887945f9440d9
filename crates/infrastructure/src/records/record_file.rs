use static_dns_application::ports::RecordSource;
use static_dns_domain::DomainError;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Record source backed by a file on disk.
pub struct RecordFile {
    path: String,
}

impl RecordFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for RecordFile {
    fn name(&self) -> &str {
        &self.path
    }

    fn open(&self) -> Result<Box<dyn BufRead + Send>, DomainError> {
        let file = File::open(&self.path).map_err(|e| DomainError::RecordFileOpen {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}
