//! Full message assembly: header, question section, answer section.
//!
//! Authority and additional records are neither written nor parsed.

use super::header::{HeaderCodec, HEADER_LEN};
use super::name::CompressionContext;
use super::record::RecordCodec;
use ferrous_relay_domain::{DomainError, Message};

/// Classic UDP payload limit without EDNS(0).
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

/// Smallest encodings: root name plus type and class for a question, and
/// root name plus the fixed fields for an answer.
const MIN_QUESTION_LEN: usize = 5;
const MIN_ANSWER_LEN: usize = 11;

pub struct MessageCodec;

impl MessageCodec {
    /// Serializes `message`, sharing one compression context across every
    /// record of both sections.
    ///
    /// Fails with `SectionCountMismatch` when the header counts disagree with
    /// the sections, and never emits a partial message.
    pub fn encode(message: &Message) -> Result<Vec<u8>, DomainError> {
        check_count("question", message.header.question_count, message.questions.len())?;
        check_count("answer", message.header.answer_count, message.answers.len())?;

        let mut header = message.header;
        header.nameserver_count = 0;
        header.additional_count = 0;

        let mut buf = Vec::with_capacity(MAX_UDP_MESSAGE_SIZE);
        let mut ctx = CompressionContext::new();

        HeaderCodec::encode(&header, &mut buf);
        for question in &message.questions {
            RecordCodec::encode_question(question, &mut buf, &mut ctx)?;
        }
        for answer in &message.answers {
            RecordCodec::encode_answer(answer, &mut buf, &mut ctx)?;
        }

        Ok(buf)
    }

    /// Parses the header, then exactly `question_count` questions and
    /// `answer_count` answers. Compression pointers may reference any earlier
    /// offset of `bytes`.
    pub fn decode(bytes: &[u8]) -> Result<Message, DomainError> {
        let header = HeaderCodec::decode(bytes)?;
        let mut pos = HEADER_LEN;

        let mut questions = Vec::with_capacity(capacity_for(
            header.question_count,
            bytes.len().saturating_sub(pos),
            MIN_QUESTION_LEN,
        ));
        for _ in 0..header.question_count {
            ensure_remaining(bytes, pos)?;
            let (question, next) = RecordCodec::decode_question(bytes, pos)?;
            questions.push(question);
            pos = next;
        }

        let mut answers = Vec::with_capacity(capacity_for(
            header.answer_count,
            bytes.len().saturating_sub(pos),
            MIN_ANSWER_LEN,
        ));
        for _ in 0..header.answer_count {
            ensure_remaining(bytes, pos)?;
            let (answer, next) = RecordCodec::decode_answer(bytes, pos)?;
            answers.push(answer);
            pos = next;
        }

        Ok(Message {
            header,
            questions,
            answers,
        })
    }
}

fn check_count(section: &'static str, declared: u16, actual: usize) -> Result<(), DomainError> {
    if declared as usize != actual {
        return Err(DomainError::SectionCountMismatch {
            section,
            declared,
            actual,
        });
    }
    Ok(())
}

/// Header counts are untrusted; never reserve more records than the
/// remaining bytes could hold.
fn capacity_for(declared: u16, remaining: usize, min_len: usize) -> usize {
    (declared as usize).min(remaining / min_len)
}

/// A declared record that starts at the very end of the buffer is a
/// truncated message rather than a malformed name.
fn ensure_remaining(bytes: &[u8], pos: usize) -> Result<(), DomainError> {
    if pos >= bytes.len() {
        return Err(DomainError::TruncatedMessage {
            offset: pos,
            needed: 1,
        });
    }
    Ok(())
}
