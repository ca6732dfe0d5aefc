use super::{RecordClass, RecordType};
use std::fmt;
use std::net::Ipv4Addr;

/// Type-dependent payload of an answer record.
///
/// Only address data is defined; answers of any other type cannot be
/// encoded or decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordData {
    A(Ipv4Addr),
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub domain: String,
    pub record_type: RecordType,
    pub class: RecordClass,
    pub ttl: u32,
    pub data: RecordData,
}

impl Answer {
    pub fn new(
        domain: impl Into<String>,
        record_type: RecordType,
        class: RecordClass,
        ttl: u32,
        data: RecordData,
    ) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            class,
            ttl,
            data,
        }
    }

    /// Address record in the IN class.
    pub fn a(domain: impl Into<String>, ttl: u32, address: Ipv4Addr) -> Self {
        Self::new(
            domain,
            RecordType::A,
            RecordClass::IN,
            ttl,
            RecordData::A(address),
        )
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.domain, self.ttl, self.class, self.record_type, self.data
        )
    }
}
