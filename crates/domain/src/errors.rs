use crate::dns_record::RecordType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed header: need 12 bytes, got {0}")]
    MalformedHeader(usize),

    #[error("Malformed domain name at offset {offset}: {reason}")]
    MalformedName { offset: usize, reason: &'static str },

    #[error("Truncated message: needed {needed} bytes at offset {offset}")]
    TruncatedMessage { offset: usize, needed: usize },

    #[error("Unknown record type: {0}")]
    UnknownRecordType(u16),

    #[error("Unknown record class: {0}")]
    UnknownRecordClass(u16),

    #[error("Record data not implemented for type {0}")]
    UnsupportedRecordType(RecordType),

    #[error("Malformed record data: {0}")]
    MalformedRecordData(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Header declares {declared} {section} records but message has {actual}")]
    SectionCountMismatch {
        section: &'static str,
        declared: u16,
        actual: usize,
    },

    #[error("Upstream response mismatch from {server}: {reason}")]
    ResponseMismatch { server: String, reason: String },

    #[error("Query timeout waiting for {server}")]
    QueryTimeout { server: String },

    #[error("Invalid upstream address: {0}")]
    InvalidUpstreamAddress(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
