mod helpers;

use ferrous_relay_application::use_cases::HandleDnsQueryUseCase;
use ferrous_relay_domain::dns_message::{RCODE_NOT_IMPLEMENTED, RCODE_NO_ERROR};
use ferrous_relay_domain::{DomainError, Header, Message, Question, RecordClass, RecordType};
use helpers::MockDnsResolver;
use std::net::Ipv4Addr;
use std::sync::Arc;

fn query(id: u16, names: &[&str]) -> Message {
    let questions: Vec<_> = names
        .iter()
        .map(|n| Question::new(*n, RecordType::A, RecordClass::IN))
        .collect();
    Message::new(Header::query(id, questions.len() as u16), questions, vec![])
}

#[tokio::test]
async fn test_execute_builds_response_with_answers_in_question_order() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver.set_address("a.com", Ipv4Addr::new(1, 2, 3, 4)).await;
    resolver.set_address("b.com", Ipv4Addr::new(5, 6, 7, 8)).await;
    let use_case = HandleDnsQueryUseCase::new(resolver.clone());

    let response = use_case.execute(&query(42, &["a.com", "b.com"])).await.unwrap();

    assert_eq!(response.header.id, 42);
    assert!(response.header.is_response);
    assert_eq!(response.header.response_code, RCODE_NO_ERROR);
    assert_eq!(response.header.question_count, 2);
    assert_eq!(response.header.answer_count, 2);
    assert_eq!(response.answers[0].domain, "a.com");
    assert_eq!(response.answers[1].domain, "b.com");
    assert_eq!(resolver.calls().await.len(), 1);
}

#[tokio::test]
async fn test_execute_non_standard_opcode_sets_not_implemented() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver.set_address("a.com", Ipv4Addr::new(1, 2, 3, 4)).await;
    let use_case = HandleDnsQueryUseCase::new(resolver);

    let mut request = query(9, &["a.com"]);
    request.header.opcode = 1;

    let response = use_case.execute(&request).await.unwrap();

    assert_eq!(response.header.opcode, 1);
    assert_eq!(response.header.response_code, RCODE_NOT_IMPLEMENTED);
    assert_eq!(response.answers.len(), 1);
}

#[tokio::test]
async fn test_execute_propagates_resolver_failure() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver
        .set_error(DomainError::QueryTimeout {
            server: "192.0.2.1:53".to_string(),
        })
        .await;
    let use_case = HandleDnsQueryUseCase::new(resolver);

    let result = use_case.execute(&query(1, &["a.com"])).await;

    assert!(matches!(result, Err(DomainError::QueryTimeout { .. })));
}

#[tokio::test]
async fn test_execute_empty_query() {
    let use_case = HandleDnsQueryUseCase::new(Arc::new(MockDnsResolver::new()));

    let response = use_case.execute(&query(3, &[])).await.unwrap();

    assert_eq!(response.header.question_count, 0);
    assert_eq!(response.header.answer_count, 0);
    assert!(response.questions.is_empty());
}
