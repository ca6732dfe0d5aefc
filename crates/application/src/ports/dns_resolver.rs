use async_trait::async_trait;
use ferrous_relay_domain::{Answer, DomainError, Message};

#[derive(Debug, Clone, Default)]
pub struct DnsResolution {
    /// Answers in the order of the questions they resolve.
    pub answers: Vec<Answer>,
    pub upstream_server: Option<String>,
}

impl DnsResolution {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers,
            upstream_server: None,
        }
    }

    pub fn from_upstream(answers: Vec<Answer>, server: impl Into<String>) -> Self {
        Self {
            answers,
            upstream_server: Some(server.into()),
        }
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Resolves every question of `query`. Failing any question fails the
    /// whole query.
    async fn resolve(&self, query: &Message) -> Result<DnsResolution, DomainError>;
}
