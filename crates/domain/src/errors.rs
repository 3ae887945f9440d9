use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Failed to open record file {path}: {reason}")]
    RecordFileOpen { path: String, reason: String },

    #[error("{path}:{line} invalid record")]
    InvalidRecordLine { path: String, line: usize },

    #[error("{path}:{line} invalid IP address format: {value:?}")]
    InvalidRecordAddress {
        path: String,
        line: usize,
        value: String,
    },

    #[error("{path}:{line} read error: {reason}")]
    RecordRead {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Unsupported transport: {0:?}")]
    UnsupportedTransport(String),

    #[error("Invalid bind address {address:?}: {reason}")]
    InvalidBindAddress { address: String, reason: String },

    #[error("Listener {endpoint} failed: {reason}")]
    Listen { endpoint: String, reason: String },

    #[error("Listener {endpoint} failed to terminate: {reason}")]
    Shutdown { endpoint: String, reason: String },
}

impl DomainError {
    /// Error kind as printed next to the message on fatal startup failures.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::RecordFileOpen { .. } => "FileOpenError",
            DomainError::InvalidRecordLine { .. } => "LineFormatError",
            DomainError::InvalidRecordAddress { .. } => "AddressFormatError",
            DomainError::RecordRead { .. } => "RecordReadError",
            DomainError::UnsupportedTransport(_)
            | DomainError::InvalidBindAddress { .. }
            | DomainError::Listen { .. } => "ListenError",
            DomainError::Shutdown { .. } => "ShutdownError",
        }
    }
}
