use super::message_builder::UpstreamQuery;
use crate::dns::wire::MessageCodec;
use ferrous_relay_domain::dns_message::RCODE_NO_ERROR;
use ferrous_relay_domain::{Answer, DomainError, Message};
use tracing::{debug, warn};

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes an upstream reply and checks that it answers `query`: same
    /// transaction id, QR set, and the question echoed back.
    ///
    /// An error reply (non-zero rcode) may omit the question section; it is
    /// accepted and carries no answers.
    pub fn parse(
        response_bytes: &[u8],
        query: &UpstreamQuery,
        server: &str,
    ) -> Result<Message, DomainError> {
        let response = MessageCodec::decode(response_bytes)?;
        let mismatch = |reason: String| DomainError::ResponseMismatch {
            server: server.to_string(),
            reason,
        };

        if response.header.id != query.id() {
            return Err(mismatch(format!(
                "id mismatch: sent {}, got {}",
                query.id(),
                response.header.id
            )));
        }

        if !response.header.is_response {
            return Err(mismatch("reply is not marked as a response".to_string()));
        }

        match response.questions.as_slice() {
            [echoed] if echoed.matches(query.question()) => {}
            [] if response.header.response_code != RCODE_NO_ERROR => {}
            [echoed] => {
                return Err(mismatch(format!(
                    "question mismatch: sent '{}', got '{}'",
                    query.question(),
                    echoed
                )))
            }
            other => {
                return Err(mismatch(format!(
                    "expected 1 echoed question, got {}",
                    other.len()
                )))
            }
        }

        if response.header.response_code != RCODE_NO_ERROR {
            warn!(
                server = %server,
                question = %query.question(),
                rcode = response.header.response_code,
                "Upstream returned an error rcode"
            );
        }

        debug!(
            server = %server,
            question = %query.question(),
            answers = response.answers.len(),
            truncated = response.header.truncated,
            "Upstream response parsed"
        );

        Ok(response)
    }

    /// Answers of a validated reply.
    pub fn answers(
        response_bytes: &[u8],
        query: &UpstreamQuery,
        server: &str,
    ) -> Result<Vec<Answer>, DomainError> {
        Self::parse(response_bytes, query, server).map(|response| response.answers)
    }
}
