//! DNS Message Builder
//!
//! Splits a client query into single-question upstream queries and
//! serializes them with the wire codec.

use crate::dns::wire::MessageCodec;
use ferrous_relay_domain::{DomainError, Message, Question};

/// Upstream query for one question, kept alongside its bytes so the reply
/// can be checked against what was sent.
#[derive(Debug, Clone)]
pub struct UpstreamQuery {
    pub message: Message,
    pub bytes: Vec<u8>,
}

impl UpstreamQuery {
    pub fn id(&self) -> u16 {
        self.message.header.id
    }

    pub fn question(&self) -> &Question {
        &self.message.questions[0]
    }
}

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build one upstream query per question of `incoming`, in question order.
    ///
    /// Each query copies the incoming header with a single question, no
    /// answers and a fresh random transaction id.
    pub fn split_query(incoming: &Message) -> Result<Vec<UpstreamQuery>, DomainError> {
        incoming
            .questions
            .iter()
            .map(|question| Self::build_query_with_id(incoming, question, fastrand::u16(..)))
            .collect()
    }

    /// Build the single-question query for `question` using `id`.
    pub fn build_query_with_id(
        incoming: &Message,
        question: &Question,
        id: u16,
    ) -> Result<UpstreamQuery, DomainError> {
        let mut header = incoming.header;
        header.id = id;
        header.is_response = false;
        header.question_count = 1;
        header.answer_count = 0;
        header.nameserver_count = 0;
        header.additional_count = 0;

        let message = Message::new(header, vec![question.clone()], vec![]);
        let bytes = MessageCodec::encode(&message)?;

        Ok(UpstreamQuery { message, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrous_relay_domain::{Header, RecordClass, RecordType};

    fn incoming(names: &[&str]) -> Message {
        let questions = names
            .iter()
            .map(|n| Question::new(*n, RecordType::A, RecordClass::IN))
            .collect::<Vec<_>>();
        Message::new(Header::query(1234, questions.len() as u16), questions, vec![])
    }

    #[test]
    fn test_split_yields_one_query_per_question_in_order() {
        let queries = MessageBuilder::split_query(&incoming(&["a.com", "b.com", "c.com"])).unwrap();

        let names: Vec<_> = queries.iter().map(|q| q.question().domain.as_str()).collect();
        assert_eq!(names, vec!["a.com", "b.com", "c.com"]);
        for query in &queries {
            assert_eq!(query.message.header.question_count, 1);
            assert_eq!(query.message.questions.len(), 1);
        }
    }

    #[test]
    fn test_query_keeps_incoming_flags() {
        let mut message = incoming(&["a.com", "b.com"]);
        message.header.recursion_desired = false;
        message.header.opcode = 2;

        let query =
            MessageBuilder::build_query_with_id(&message, &message.questions[1], 0xABCD).unwrap();

        assert_eq!(query.id(), 0xABCD);
        assert_eq!(query.message.header.opcode, 2);
        assert!(!query.message.header.recursion_desired);
        assert_eq!(&query.bytes[0..2], &[0xAB, 0xCD]);
        // QDCOUNT
        assert_eq!(&query.bytes[4..6], &[0x00, 0x01]);
    }

    #[test]
    fn test_empty_query_yields_no_upstream_queries() {
        let queries = MessageBuilder::split_query(&incoming(&[])).unwrap();
        assert!(queries.is_empty());
    }
}
