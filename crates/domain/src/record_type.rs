use std::fmt;

/// Query type as far as the record table is concerned.
///
/// Only the two address types carry data; everything else is kept as its
/// numeric wire value for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    Other(u16),
}

impl RecordType {
    pub const A_CODE: u16 = 1;
    pub const AAAA_CODE: u16 = 28;
}

impl From<u16> for RecordType {
    fn from(code: u16) -> Self {
        match code {
            Self::A_CODE => RecordType::A,
            Self::AAAA_CODE => RecordType::AAAA,
            other => RecordType::Other(other),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => f.write_str("A"),
            RecordType::AAAA => f.write_str("AAAA"),
            RecordType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}
