use std::sync::Arc;

use ratatui::style::Color;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use webscrap::backend::{BackendError, HttpBackend, SummaryBackend};
use webscrap::core::action::{Action, Effect, update};
use webscrap::core::state::{App, FIXED_ERROR_MESSAGE, RequestState};
use webscrap::core::submission;
use webscrap::tui::markdown;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// A local URI nothing is listening on.
fn closed_port_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

fn app_for(server: &MockServer) -> App {
    App::new(Arc::new(HttpBackend::new(server.uri())))
}

/// Types `text`, presses submit, and runs any requested submission to
/// completion. Returns the effect the submit produced.
async fn submit(app: &mut App, text: &str) -> Effect {
    update(app, Action::InputChanged(text.to_string()));
    let effect = update(app, Action::Submit);
    if let Effect::SpawnRequest(ref body) = effect {
        let backend = app.backend.clone();
        let finished = submission::run(backend.as_ref(), body).await;
        update(app, finished);
    }
    effect
}

// ============================================================================
// HttpBackend
// ============================================================================

#[tokio::test]
async fn test_process_posts_json_and_returns_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"text": "https://example.com"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"summary": "# Example\nShort site."})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let summary = assert_ok!(backend.process("https://example.com").await);
    assert_eq!(summary, "# Example\nShort site.");
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"summary": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(format!("{}/", mock_server.uri()));
    assert_ok!(backend.process("x").await);
}

#[tokio::test]
async fn test_extra_response_fields_are_ignored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": "text",
            "source": "youtube",
            "elapsed_ms": 1200
        })))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    assert_eq!(assert_ok!(backend.process("x").await), "text");
}

#[tokio::test]
async fn test_http_500_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(500).set_body_string("scraper crashed"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let err = assert_err!(backend.process("x").await);
    match err {
        BackendError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "scraper crashed");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let err = assert_err!(backend.process("x").await);
    assert!(matches!(err, BackendError::Parse(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_missing_summary_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "x"})))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri());
    let err = assert_err!(backend.process("x").await);
    assert!(matches!(err, BackendError::Parse(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let backend = HttpBackend::new(closed_port_uri());
    let err = assert_err!(backend.process("hello").await);
    assert!(matches!(err, BackendError::Network(_)), "got {:?}", err);
}

// ============================================================================
// Full submission cycle
// ============================================================================

#[tokio::test]
async fn test_successful_submission_shows_rendered_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process"))
        .and(body_json(json!({"text": "https://example.com"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"summary": "# Example\nShort site."})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server);
    let effect = submit(&mut app, "https://example.com").await;

    assert_eq!(effect, Effect::SpawnRequest("https://example.com".to_string()));
    assert_eq!(app.request_state, RequestState::Idle);
    assert!(app.response_visible);
    assert_eq!(app.response_text, "# Example\nShort site.");

    let rendered = markdown::render(&app.response_text, Color::White);
    let lines: Vec<String> = rendered
        .lines
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect();
    assert_eq!(lines, vec!["# Example", "", "Short site."]);
}

#[tokio::test]
async fn test_failed_submission_shows_fixed_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad url"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server);
    submit(&mut app, "not a url").await;

    assert_eq!(app.request_state, RequestState::Idle);
    assert!(app.response_visible);
    assert_eq!(app.response_text, FIXED_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_network_failure_shows_fixed_message() {
    let mut app = App::new(Arc::new(HttpBackend::new(closed_port_uri())));

    submit(&mut app, "hello").await;

    assert_eq!(app.request_state, RequestState::Idle);
    assert!(app.response_visible);
    assert_eq!(app.response_text, FIXED_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_empty_input_issues_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"summary": "x"})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server);
    assert_eq!(submit(&mut app, "").await, Effect::None);
    assert_eq!(submit(&mut app, "  \n\t").await, Effect::None);

    assert_eq!(app.request_state, RequestState::Idle);
    assert!(!app.response_visible);
}

#[tokio::test]
async fn test_raw_untrimmed_text_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process"))
        .and(body_json(json!({"text": "  rust async  \n"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"summary": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server);
    submit(&mut app, "  rust async  \n").await;
    assert_eq!(app.response_text, "ok");
}

#[tokio::test]
async fn test_second_submit_while_loading_sends_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"summary": "first"}))
                .set_delay(std::time::Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server);
    update(&mut app, Action::InputChanged("hello".to_string()));

    let first = update(&mut app, Action::Submit);
    let Effect::SpawnRequest(text) = first else {
        panic!("Expected SpawnRequest, got {:?}", first);
    };
    let backend = app.backend.clone();
    let in_flight = tokio::spawn(async move { submission::run(backend.as_ref(), &text).await });

    // Still Loading: the second press is rejected outright.
    assert_eq!(update(&mut app, Action::Submit), Effect::None);
    assert_eq!(app.request_state, RequestState::Loading);
    assert!(!app.response_visible);

    let finished = assert_ok!(in_flight.await);
    update(&mut app, finished);

    assert_eq!(app.request_state, RequestState::Idle);
    assert_eq!(app.response_text, "first");
}

#[tokio::test]
async fn test_resubmit_hides_previous_response_until_done() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"summary": "again"})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut app = app_for(&mock_server);
    submit(&mut app, "one").await;
    assert!(app.response_visible);

    update(&mut app, Action::InputChanged("two".to_string()));
    assert!(matches!(update(&mut app, Action::Submit), Effect::SpawnRequest(_)));
    assert!(!app.response_visible);
    assert_eq!(app.status_message, "Processing...");

    let backend = app.backend.clone();
    let finished = submission::run(backend.as_ref(), "two").await;
    update(&mut app, finished);
    assert!(app.response_visible);
    assert_eq!(app.status_message, "Done");
}
