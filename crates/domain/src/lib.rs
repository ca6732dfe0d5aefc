//! Ferrous Relay Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_protocol;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{Header, Message, Question};
pub use dns_protocol::UpstreamAddr;
pub use dns_record::{Answer, RecordClass, RecordData, RecordType};
pub use errors::DomainError;
