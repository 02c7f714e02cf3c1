//! End-to-end refresh scenarios against a local HTTP stub.
//!
//! Each test stands up a one-shot server speaking just enough HTTP/1.1 for
//! reqwest, points a `GeminiClient` at it and checks the resulting profile.

use linkbio_core::logging::{read_entries, DiagnosticLayer};
use linkbio_core::{
    refresh_profile, EnrichmentError, GeminiClient, ProfileState, RefreshConfig, RefreshOnce,
    RefreshOutcome, RejectReason, SharedProfile,
};
use serde_json::json;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tracing_subscriber::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

/// Serve exactly one response, then hand back the raw request text.
async fn serve_once(status: u16, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    (base, handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .filter_map(|l| l.split_once(':'))
                .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, v)| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn answer(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

fn client_for(base: &str) -> GeminiClient {
    GeminiClient::new(
        RefreshConfig::default()
            .with_api_key("test-key")
            .with_endpoint(base),
    )
}

async fn refresh_against(status: u16, body: String) -> (RefreshOutcome, ProfileState) {
    let (base, server) = serve_once(status, body).await;
    let outcome = refresh_profile(&client_for(&base)).await;
    server.await.unwrap();

    let mut state = ProfileState::default();
    outcome.apply(&mut state);
    (outcome, state)
}

/// An address nothing is listening on.
async fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    base
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_plain_nickname_is_applied() {
    let (outcome, state) = refresh_against(200, answer("Skizoo")).await;
    assert_eq!(outcome.display_name(), Some("Skizoo"));
    assert_eq!(state.display_name, "Skizoo");
}

#[tokio::test]
async fn test_empty_answer_keeps_default() {
    let (outcome, state) = refresh_against(200, answer("   ")).await;
    assert!(matches!(outcome, RefreshOutcome::Rejected(RejectReason::Empty)));
    assert_eq!(state, ProfileState::default());
}

#[tokio::test]
async fn test_sixty_char_answer_keeps_default() {
    let (outcome, state) = refresh_against(200, answer(&"n".repeat(60))).await;
    assert!(matches!(outcome, RefreshOutcome::Rejected(RejectReason::TooLong(60))));
    assert_eq!(state, ProfileState::default());
}

#[tokio::test]
async fn test_network_error_logged_once() {
    let temp = TempDir::new().unwrap();
    let layer = DiagnosticLayer::new(temp.path(), "test").unwrap();
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(layer));

    let client = client_for(&closed_endpoint().await);
    let outcome = refresh_profile(&client).await;

    let mut state = ProfileState::default();
    assert!(!outcome.apply(&mut state));
    assert_eq!(state, ProfileState::default());
    assert!(matches!(outcome, RefreshOutcome::Failed(EnrichmentError::Network(_))));

    let failures: Vec<_> = read_entries(temp.path())
        .unwrap()
        .into_iter()
        .filter(|e| e.level == "error" && e.target.starts_with("linkbio_core"))
        .collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].msg, "Failed to fetch dynamic profile data");
    assert_eq!(failures[0].span.as_deref(), Some("profile_refresh"));
}

#[tokio::test]
async fn test_padded_answer_is_trimmed() {
    let (_, state) = refresh_against(200, answer("  Nova  ")).await;
    assert_eq!(state.display_name, "Nova");
}

// ============================================================================
// Service edge cases
// ============================================================================

#[tokio::test]
async fn test_request_carries_key_query_and_search_tool() {
    let (base, server) = serve_once(200, answer("Skizoo")).await;
    refresh_profile(&client_for(&base)).await;
    let request = server.await.unwrap();

    assert!(request.starts_with("POST /v1beta/models/gemini-3-flash-preview:generateContent "));
    assert!(request.to_lowercase().contains("x-goog-api-key: test-key"));
    assert!(request.contains("googleSearch"));
    assert!(request.contains("@inidoffy"));
}

#[tokio::test]
async fn test_service_error_status() {
    let body = json!({ "error": { "code": 403, "message": "API key not valid" } }).to_string();
    let (outcome, state) = refresh_against(403, body).await;

    match outcome {
        RefreshOutcome::Failed(EnrichmentError::Service { status, body }) => {
            assert_eq!(status, 403);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(state, ProfileState::default());
}

#[tokio::test]
async fn test_malformed_body() {
    let (outcome, state) = refresh_against(200, "<html>oops</html>".to_string()).await;
    assert!(matches!(outcome, RefreshOutcome::Failed(EnrichmentError::MalformedResponse(_))));
    assert_eq!(state, ProfileState::default());
}

#[tokio::test]
async fn test_no_candidates_is_absent() {
    let (outcome, _) = refresh_against(200, json!({ "candidates": [] }).to_string()).await;
    assert!(matches!(outcome, RefreshOutcome::Rejected(RejectReason::Absent)));
}

#[tokio::test]
async fn test_missing_credential_keeps_default() {
    let client = GeminiClient::new(RefreshConfig::default().with_endpoint(closed_endpoint().await));
    let outcome = refresh_profile(&client).await;
    assert!(matches!(outcome, RefreshOutcome::Failed(EnrichmentError::MissingCredential)));
}

#[tokio::test]
async fn test_retry_after_failure_behaves_fresh() {
    let profile = SharedProfile::default();

    let failed = refresh_profile(&client_for(&closed_endpoint().await)).await;
    profile.apply(&failed);
    assert_eq!(profile.snapshot(), ProfileState::default());

    let (base, server) = serve_once(200, answer("Nova")).await;
    let ok = refresh_profile(&client_for(&base)).await;
    server.await.unwrap();
    profile.apply(&ok);
    assert_eq!(profile.snapshot().display_name, "Nova");
}

#[tokio::test]
async fn test_spawned_once_against_server() {
    let (base, server) = serve_once(200, answer("Nova")).await;
    let once = RefreshOnce::new();
    let profile = SharedProfile::default();

    let handle = once.spawn(client_for(&base), profile.clone()).unwrap();
    assert!(once.spawn(client_for(&base), profile.clone()).is_none());

    assert!(handle.await.unwrap());
    server.await.unwrap();
    assert_eq!(profile.snapshot().display_name, "Nova");
    assert_eq!(profile.snapshot().avatar_url, ProfileState::default().avatar_url);
}
