use chatbot_server::services::gemini::{ChatModel, GeminiClient, LlmError};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
struct Captured {
    requests: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
}

/// Spawn a local stand-in for the generateContent endpoint and return its base URL.
async fn spawn_fake(reply: (StatusCode, Value), captured: Captured) -> String {
    let app = Router::new()
        .route(
            "/v1beta/models/{call}",
            post(
                move |State(captured): State<Captured>,
                      Path(call): Path<String>,
                      headers: HeaderMap,
                      Json(body): Json<Value>| {
                    let reply = reply.clone();
                    async move {
                        let key = headers
                            .get("x-goog-api-key")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        captured.requests.lock().unwrap().push((call, key, body));
                        (reply.0, Json(reply.1))
                    }
                },
            ),
        )
        .with_state(captured);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base_url: &str) -> GeminiClient {
    GeminiClient::new(
        Some("test-key".to_string()),
        base_url,
        "gemini-1.5-flash",
        Some(Duration::from_secs(5)),
    )
    .unwrap()
}

#[tokio::test]
async fn test_sends_single_turn_request_and_returns_text() {
    let captured = Captured::default();
    let base = spawn_fake(
        (
            StatusCode::OK,
            json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "Hello! Welcome to KaizenSpark Tech."}]},
                    "finishReason": "STOP"
                }]
            }),
        ),
        captured.clone(),
    )
    .await;

    let reply = client(&base).respond("Hi").await.unwrap();
    assert_eq!(reply, "Hello! Welcome to KaizenSpark Tech.");

    let requests = captured.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (call, key, body) = &requests[0];
    assert_eq!(call, "gemini-1.5-flash:generateContent");
    assert_eq!(key.as_deref(), Some("test-key"));

    let contents = body["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["role"], "user");
    assert_eq!(contents[0]["parts"][0]["text"], "Hi");
    assert_eq!(body["generationConfig"]["temperature"], 1.0);
    assert_eq!(body["generationConfig"]["topK"], 64);
    assert!(
        body["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("Introduction")
    );
}

#[tokio::test]
async fn test_each_call_starts_fresh() {
    let captured = Captured::default();
    let base = spawn_fake(
        (
            StatusCode::OK,
            json!({"candidates": [{"content": {"parts": [{"text": "ok"}]}}]}),
        ),
        captured.clone(),
    )
    .await;

    let client = client(&base);
    client.respond("first").await.unwrap();
    client.respond("second").await.unwrap();

    let requests = captured.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    let second = &requests[1].2;
    assert_eq!(second["contents"].as_array().unwrap().len(), 1);
    assert_eq!(second["contents"][0]["parts"][0]["text"], "second");
}

#[tokio::test]
async fn test_provider_error_status_is_surfaced() {
    let base = spawn_fake(
        (
            StatusCode::FORBIDDEN,
            json!({"error": {"code": 403, "message": "API key not valid"}}),
        ),
        Captured::default(),
    )
    .await;

    let err = client(&base).respond("Hi").await.unwrap_err();
    match &err {
        LlmError::Http { status, body } => {
            assert_eq!(*status, 403);
            assert!(body.contains("API key not valid"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("403"));
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let base = spawn_fake(
        (StatusCode::OK, json!({"candidates": "nope"})),
        Captured::default(),
    )
    .await;

    let err = client(&base).respond("Hi").await.unwrap_err();
    assert!(matches!(err, LlmError::Serialization(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_transport_error() {
    // Bind then drop to get a port nobody is listening on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr))
        .respond("Hi")
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::Transport(_)));
}
