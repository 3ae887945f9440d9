use static_dns_domain::DomainError;
use std::io::BufRead;

/// Where the static record lines come from.
pub trait RecordSource: Send + Sync {
    /// Label used in error messages, normally the file path.
    fn name(&self) -> &str;

    fn open(&self) -> Result<Box<dyn BufRead + Send>, DomainError>;
}
