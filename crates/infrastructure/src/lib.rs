//! static-dns infrastructure: record file access and DNS listeners
pub mod dns;
pub mod records;
