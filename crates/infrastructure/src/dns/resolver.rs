use async_trait::async_trait;
use ferrous_relay_application::ports::{DnsResolution, DnsResolver};
use ferrous_relay_domain::{Answer, DomainError, Message, RecordData, RecordType};
use std::net::Ipv4Addr;

pub const PLACEHOLDER_ADDRESS: Ipv4Addr = Ipv4Addr::new(8, 8, 8, 8);
pub const PLACEHOLDER_TTL: u32 = 60;

/// Answers every question locally with the same address record, used when
/// no upstream resolver is configured.
#[derive(Debug, Clone)]
pub struct PlaceholderResolver {
    address: Ipv4Addr,
    ttl: u32,
}

impl PlaceholderResolver {
    pub fn new(address: Ipv4Addr, ttl: u32) -> Self {
        Self { address, ttl }
    }
}

impl Default for PlaceholderResolver {
    fn default() -> Self {
        Self::new(PLACEHOLDER_ADDRESS, PLACEHOLDER_TTL)
    }
}

#[async_trait]
impl DnsResolver for PlaceholderResolver {
    async fn resolve(&self, query: &Message) -> Result<DnsResolution, DomainError> {
        let answers = query
            .questions
            .iter()
            .map(|question| {
                Answer::new(
                    question.domain.clone(),
                    RecordType::A,
                    question.class,
                    self.ttl,
                    RecordData::A(self.address),
                )
            })
            .collect();

        Ok(DnsResolution::new(answers))
    }
}
