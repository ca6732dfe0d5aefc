use crate::dns::wire::MessageCodec;
use ferrous_relay_application::use_cases::HandleDnsQueryUseCase;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns one inbound datagram into the bytes of its response.
///
/// Any decode, resolution or encode failure drops the datagram: the client
/// gets no answer and the failure is logged.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    pub async fn handle_raw(&self, query_buf: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let query = match MessageCodec::decode(query_buf) {
            Ok(query) => query,
            Err(e) => {
                warn!(client = %client, bytes = query_buf.len(), error = %e, "Dropping undecodable query");
                return None;
            }
        };

        debug!(
            client = %client,
            id = query.header.id,
            questions = query.questions.len(),
            "DNS query received"
        );

        let response = match self.use_case.execute(&query).await {
            Ok(response) => response,
            Err(e) => {
                warn!(client = %client, id = query.header.id, error = %e, "Dropping unresolved query");
                return None;
            }
        };

        match MessageCodec::encode(&response) {
            Ok(bytes) => {
                debug!(
                    client = %client,
                    id = response.header.id,
                    answers = response.answers.len(),
                    bytes = bytes.len(),
                    "Sending response"
                );
                Some(bytes)
            }
            Err(e) => {
                warn!(client = %client, id = response.header.id, error = %e, "Failed to encode response");
                None
            }
        }
    }
}
