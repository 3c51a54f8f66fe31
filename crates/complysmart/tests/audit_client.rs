use complysmart::audit::{AuditApiClient, AuditApiError};
use complysmart::config::AuditApiConfig;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AuditApiClient {
    let config = AuditApiConfig {
        base_url: server.uri().parse().expect("mock server uri"),
        timeout_secs: 5,
    };
    AuditApiClient::new(&config).expect("client builds")
}

#[tokio::test]
async fn run_audit_posts_to_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "score": "Score: 72 out of 100",
            "audit": "## Findings\n- KYC below standard",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let audit = client_for(&server)
        .run_audit()
        .await
        .expect("audit succeeds");
    assert_eq!(audit.score, "Score: 72 out of 100");
    assert!(audit.audit.contains("KYC"));
}

#[tokio::test]
async fn ask_sends_question_and_returns_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ans"))
        .and(body_json(json!({ "q": "What are our biggest compliance risks?" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ans": "Large investor verification." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let answer = client_for(&server)
        .ask("  What are our biggest compliance risks?  ")
        .await
        .expect("answer returned");
    assert_eq!(answer, "Large investor verification.");
}

#[tokio::test]
async fn non_success_status_is_reported_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model offline"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .run_audit()
        .await
        .expect_err("500 surfaces as error");
    match err {
        AuditApiError::Status { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body, "model offline");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_payload_is_a_deserialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "wrong key" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .ask("Any penalties?")
        .await
        .expect_err("missing ans field");
    assert!(matches!(err, AuditApiError::Deserialization { .. }));
}

#[tokio::test]
async fn unreachable_service_is_an_http_error() {
    let config = AuditApiConfig {
        base_url: "http://127.0.0.1:1".parse().expect("valid url"),
        timeout_secs: 2,
    };
    let client = AuditApiClient::new(&config).expect("client builds");

    let err = client.run_audit().await.expect_err("connection refused");
    assert!(matches!(err, AuditApiError::Http { .. }));
}
