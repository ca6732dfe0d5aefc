use super::message_builder::{MessageBuilder, UpstreamQuery};
use super::response_parser::ResponseParser;
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use ferrous_relay_application::ports::{DnsResolution, DnsResolver};
use ferrous_relay_domain::{Answer, DomainError, Message};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Forwards every question of a query to one upstream resolver and collects
/// the answers in question order.
///
/// Each question is exchanged in its own task with its own timeout; the
/// first failing exchange fails the whole query.
pub struct DnsForwarder {
    transport: Arc<dyn DnsTransport>,
    timeout: Duration,
}

impl DnsForwarder {
    pub fn new(transport: Arc<dyn DnsTransport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }

    pub fn with_timeout_ms(transport: Arc<dyn DnsTransport>, timeout_ms: u64) -> Self {
        Self::new(transport, Duration::from_millis(timeout_ms))
    }

    async fn exchange(
        transport: Arc<dyn DnsTransport>,
        query: UpstreamQuery,
        timeout: Duration,
    ) -> Result<Vec<Answer>, DomainError> {
        let server = transport.server();

        debug!(
            server = %server,
            id = query.id(),
            question = %query.question(),
            "Forwarding question upstream"
        );

        let response = transport.send(&query.bytes, timeout).await?;
        ResponseParser::answers(&response.bytes, &query, &server)
    }
}

#[async_trait]
impl DnsResolver for DnsForwarder {
    async fn resolve(&self, query: &Message) -> Result<DnsResolution, DomainError> {
        // Only standard queries go upstream; anything else is answered NOTIMP locally.
        if !query.header.is_standard_query() {
            debug!(
                id = query.header.id,
                opcode = query.header.opcode,
                "Not forwarding non-standard opcode"
            );
            return Ok(DnsResolution::new(vec![]));
        }

        let upstream_queries = MessageBuilder::split_query(query)?;

        let handles: Vec<_> = upstream_queries
            .into_iter()
            .map(|upstream_query| {
                tokio::spawn(Self::exchange(
                    Arc::clone(&self.transport),
                    upstream_query,
                    self.timeout,
                ))
            })
            .collect();

        let results = futures::future::join_all(handles).await;

        let mut answers = Vec::with_capacity(results.len());
        for result in results {
            let question_answers = result
                .map_err(|e| DomainError::IoError(format!("Upstream exchange task failed: {}", e)))??;
            answers.extend(question_answers);
        }

        debug!(
            id = query.header.id,
            questions = query.questions.len(),
            answers = answers.len(),
            "Upstream answers collected"
        );

        Ok(DnsResolution::from_upstream(answers, self.transport.server()))
    }
}
