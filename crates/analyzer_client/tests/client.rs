use std::sync::Arc;
use std::time::Duration;

use analyzer_client::{
    AnalysisApi, AnalysisRequest, ClientConfig, ClientEvent, FailureKind, ReqwestAnalysisClient,
    SubmitHandle, ACCESS_TOKEN_HEADER,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_endpoint(Url::parse(&server.uri()).expect("mock server uri"))
        .with_access_token("secret")
}

fn client_for(server: &MockServer) -> ReqwestAnalysisClient {
    ReqwestAnalysisClient::new(config_for(server)).expect("build client")
}

#[test]
fn text_request_serializes_to_single_text_field() {
    let request = AnalysisRequest::from_inputs("the terms", "").expect("payload");
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "text": "the terms" })
    );
}

#[test]
fn url_wins_over_populated_text() {
    let request =
        AnalysisRequest::from_inputs("the terms", " https://example.com/tos ").expect("payload");
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "url": "https://example.com/tos" })
    );
}

#[test]
fn whitespace_only_inputs_select_nothing() {
    assert_eq!(AnalysisRequest::from_inputs("   \n", "  \t"), None);
}

#[tokio::test]
async fn submit_sends_token_and_parses_scored_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_terms"))
        .and(header(ACCESS_TOKEN_HEADER, "secret"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "text": "the terms" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "feedback": "ok", "score": 87 })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = AnalysisRequest::Text("the terms".to_string());

    let result = client.submit(&request).await.expect("analysis ok");
    assert_eq!(result.feedback, "ok");
    assert_eq!(result.score, Some(87.0));
}

#[tokio::test]
async fn empty_reply_defaults_feedback_and_score() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_terms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = AnalysisRequest::Text("terms".to_string());

    let result = client.submit(&request).await.expect("analysis ok");
    assert_eq!(result.feedback, "No feedback returned");
    assert_eq!(result.score, None);
}

#[tokio::test]
async fn failure_status_surfaces_server_error_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_terms"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "error": "bad token" })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .submit(&AnalysisRequest::Text("terms".to_string()))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(403));
    assert_eq!(err.message, "bad token");
}

#[tokio::test]
async fn failure_status_without_error_field_gets_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_terms"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .submit(&AnalysisRequest::Text("terms".to_string()))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "Request failed: 500");
}

#[tokio::test]
async fn non_json_content_type_is_terminal_even_on_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_terms"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html>oops</html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .submit(&AnalysisRequest::PageUrl("https://example.com".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err.kind, FailureKind::UnexpectedContentType(_)));
    assert!(err.message.contains("text/html"));
    assert_eq!(err.raw_body.as_deref(), Some("<html>oops</html>"));
}

#[tokio::test]
async fn malformed_json_body_fails_with_status_coded_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_terms"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .submit(&AnalysisRequest::Text("terms".to_string()))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::InvalidJson(200));
    assert_eq!(err.message, "Invalid JSON response (status 200)");
}

#[tokio::test]
async fn unreachable_server_reduces_to_generic_network_error() {
    // Port 9 (discard) is not listening; the connect attempt fails fast.
    let config = ClientConfig {
        connect_timeout: Duration::from_millis(200),
        request_timeout: Duration::from_millis(500),
        ..ClientConfig::default()
    }
    .with_endpoint(Url::parse("http://127.0.0.1:9").unwrap());
    let client = ReqwestAnalysisClient::new(config).expect("build client");

    let err = client
        .submit(&AnalysisRequest::Text("terms".to_string()))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::Network);
    assert_eq!(err.message, "Network error");
}

#[tokio::test]
async fn submit_handle_reports_resolution_with_generation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_terms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "feedback": "fine" })))
        .mount(&server)
        .await;

    let api = Arc::new(client_for(&server));
    let (handle, events) = SubmitHandle::new(api);
    handle.submit(7, AnalysisRequest::Text("terms".to_string()));

    let event = events
        .recv_timeout(Duration::from_secs(5))
        .expect("resolution event");
    let ClientEvent::Resolved { generation, result } = event;
    assert_eq!(generation, 7);
    assert_eq!(result.expect("analysis ok").feedback, "fine");
}
