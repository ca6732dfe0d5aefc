use crate::ports::DnsResolver;
use ferrous_relay_domain::{DomainError, Message};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

pub struct HandleDnsQueryUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Resolves `query` and builds the response carrying the collected answers.
    pub async fn execute(&self, query: &Message) -> Result<Message, DomainError> {
        let start = Instant::now();

        if !query.header.is_standard_query() {
            debug!(
                id = query.header.id,
                opcode = query.header.opcode,
                "Non-standard opcode, response will carry NOTIMP"
            );
        }

        match self.resolver.resolve(query).await {
            Ok(resolution) => {
                let response = Message::response_for(query, resolution.answers);

                debug!(
                    id = response.header.id,
                    questions = response.questions.len(),
                    answers = response.answers.len(),
                    upstream = ?resolution.upstream_server,
                    elapsed_us = start.elapsed().as_micros() as u64,
                    "Query resolved"
                );

                Ok(response)
            }
            Err(e) => {
                warn!(
                    id = query.header.id,
                    error = %e,
                    elapsed_us = start.elapsed().as_micros() as u64,
                    "Query resolution failed"
                );
                Err(e)
            }
        }
    }
}
