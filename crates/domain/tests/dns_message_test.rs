use ferrous_relay_domain::dns_message::{RCODE_NOT_IMPLEMENTED, RCODE_NO_ERROR};
use ferrous_relay_domain::{Answer, Header, Message, Question, RecordClass, RecordType};
use std::net::Ipv4Addr;

fn query(opcode: u8, rd: bool) -> Message {
    let mut header = Header::query(1234, 1);
    header.opcode = opcode;
    header.recursion_desired = rd;
    header.authoritative = true;
    header.z = 5;
    Message::new(
        header,
        vec![Question::new("codecrafters.io", RecordType::A, RecordClass::IN)],
        vec![],
    )
}

#[test]
fn test_response_for_standard_query() {
    let request = query(0, true);
    let answer = Answer::a("codecrafters.io", 60, Ipv4Addr::new(8, 8, 8, 8));

    let response = Message::response_for(&request, vec![answer.clone()]);

    assert_eq!(response.header.id, 1234);
    assert!(response.header.is_response);
    assert_eq!(response.header.opcode, 0);
    assert!(response.header.recursion_desired);
    assert!(!response.header.authoritative);
    assert!(!response.header.truncated);
    assert!(!response.header.recursion_available);
    assert_eq!(response.header.z, 0);
    assert_eq!(response.header.response_code, RCODE_NO_ERROR);
    assert_eq!(response.header.question_count, 1);
    assert_eq!(response.header.answer_count, 1);
    assert_eq!(response.header.nameserver_count, 0);
    assert_eq!(response.header.additional_count, 0);
    assert_eq!(response.questions, request.questions);
    assert_eq!(response.answers, vec![answer]);
}

#[test]
fn test_response_for_non_standard_opcode_is_not_implemented() {
    let request = query(2, false);

    let response = Message::response_for(&request, vec![]);

    assert_eq!(response.header.opcode, 2);
    assert!(!response.header.recursion_desired);
    assert_eq!(response.header.response_code, RCODE_NOT_IMPLEMENTED);
    assert_eq!(response.header.answer_count, 0);
}

#[test]
fn test_header_query_defaults() {
    let header = Header::query(7, 3);

    assert_eq!(header.id, 7);
    assert!(!header.is_response);
    assert!(header.recursion_desired);
    assert!(header.is_standard_query());
    assert_eq!(header.question_count, 3);
    assert_eq!(header.answer_count, 0);
}

#[test]
fn test_question_matches_ignores_case_and_trailing_dot() {
    let sent = Question::new("Example.COM", RecordType::A, RecordClass::IN);

    assert!(sent.matches(&Question::new("example.com.", RecordType::A, RecordClass::IN)));
    assert!(!sent.matches(&Question::new("example.org.", RecordType::A, RecordClass::IN)));
    assert!(!sent.matches(&Question::new("example.com.", RecordType::MX, RecordClass::IN)));
    assert!(!sent.matches(&Question::new("example.com.", RecordType::A, RecordClass::CH)));
}

#[test]
fn test_question_display() {
    let question = Question::new("a.com.", RecordType::A, RecordClass::IN);
    assert_eq!(question.to_string(), "a.com. IN A");
}
