pub mod header;
pub mod question;

pub use header::{Header, OPCODE_QUERY, RCODE_NOT_IMPLEMENTED, RCODE_NO_ERROR};
pub use question::Question;

use crate::dns_record::Answer;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<Answer>,
}

impl Message {
    pub fn new(header: Header, questions: Vec<Question>, answers: Vec<Answer>) -> Self {
        Self {
            header,
            questions,
            answers,
        }
    }

    /// Builds the response to `incoming` carrying `answers`.
    ///
    /// Id, opcode and RD are echoed, the questions are copied unchanged and
    /// RCODE is NOTIMP for anything but a standard query.
    pub fn response_for(incoming: &Message, answers: Vec<Answer>) -> Self {
        let request = &incoming.header;
        let response_code = if request.is_standard_query() {
            RCODE_NO_ERROR
        } else {
            RCODE_NOT_IMPLEMENTED
        };

        let header = Header {
            id: request.id,
            is_response: true,
            opcode: request.opcode,
            authoritative: false,
            truncated: false,
            recursion_desired: request.recursion_desired,
            recursion_available: false,
            z: 0,
            response_code,
            question_count: request.question_count,
            answer_count: answers.len() as u16,
            nameserver_count: 0,
            additional_count: 0,
        };

        Self {
            header,
            questions: incoming.questions.clone(),
            answers,
        }
    }
}
