use async_trait::async_trait;
use ferrous_relay_application::ports::{DnsResolution, DnsResolver};
use ferrous_relay_domain::{Answer, DomainError, Message};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Resolver answering from a fixed table keyed by question name.
pub struct MockDnsResolver {
    addresses: Arc<RwLock<HashMap<String, Ipv4Addr>>>,
    error: Arc<RwLock<Option<DomainError>>>,
    calls: Arc<RwLock<Vec<Message>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self {
            addresses: Arc::new(RwLock::new(HashMap::new())),
            error: Arc::new(RwLock::new(None)),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn set_address(&self, domain: &str, address: Ipv4Addr) {
        self.addresses
            .write()
            .await
            .insert(domain.to_string(), address);
    }

    pub async fn set_error(&self, error: DomainError) {
        *self.error.write().await = Some(error);
    }

    pub async fn calls(&self) -> Vec<Message> {
        self.calls.read().await.clone()
    }
}

impl Default for MockDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &Message) -> Result<DnsResolution, DomainError> {
        self.calls.write().await.push(query.clone());

        if let Some(err) = self.error.read().await.clone() {
            return Err(err);
        }

        let addresses = self.addresses.read().await;
        let answers = query
            .questions
            .iter()
            .filter_map(|q| {
                addresses
                    .get(&q.domain)
                    .map(|addr| Answer::a(q.domain.clone(), 300, *addr))
            })
            .collect();

        Ok(DnsResolution::from_upstream(answers, "mock"))
    }
}
