use crate::dns_record::{RecordClass, RecordType};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub domain: String,
    pub record_type: RecordType,
    pub class: RecordClass,
}

impl Question {
    pub fn new(domain: impl Into<String>, record_type: RecordType, class: RecordClass) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            class,
        }
    }

    /// Compares two questions the way a resolver echo is checked: names are
    /// case-insensitive and a trailing root dot is ignored.
    pub fn matches(&self, other: &Question) -> bool {
        self.record_type == other.record_type
            && self.class == other.class
            && self
                .domain
                .trim_end_matches('.')
                .eq_ignore_ascii_case(other.domain.trim_end_matches('.'))
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.domain, self.class, self.record_type)
    }
}
