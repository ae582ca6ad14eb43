//! End-to-end tests for the chat endpoint: success, fallback, exhaustion,
//! persona selection, and lenient body handling.

mod common;

use axum::http::StatusCode;
use tower::ServiceExt;

use common::{ScriptedPort, chat_request, discovery_config, json_body, router_with, static_config};
use promptgate_axum::handlers::chat::EXHAUSTED_REPLY;
use serde_json::json;

#[tokio::test]
async fn successful_generation_returns_200_with_the_reply() {
    let port = ScriptedPort::new(0, "SIP beats lump sum here.");
    let app = router_with(&static_config(), port.clone());

    let response = app
        .oneshot(chat_request(json!({ "message": "SIP or lump sum?", "context": "fd_sip" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["reply"], "SIP beats lump sum here.");
    assert_eq!(port.generate_calls(), 1);
}

#[tokio::test]
async fn first_candidate_failure_falls_through_to_the_second() {
    let port = ScriptedPort::new(1, "Recovered on fallback.");
    let app = router_with(&static_config(), port.clone());

    let response = app
        .oneshot(chat_request(json!({ "message": "hi", "context": "home" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["reply"], "Recovered on fallback.");
    assert_eq!(port.generate_calls(), 2);
}

#[tokio::test]
async fn exhausted_chain_returns_500_with_the_fixed_apology() {
    let port = ScriptedPort::always_failing();
    let app = router_with(&static_config(), port.clone());

    let response = app
        .oneshot(chat_request(json!({ "message": "hi", "context": "home" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["reply"], EXHAUSTED_REPLY);
    // One attempt per configured candidate, nothing beyond.
    assert_eq!(port.generate_calls(), 2);
}

#[tokio::test]
async fn upstream_error_details_never_reach_the_client() {
    let port = ScriptedPort::always_failing();
    let app = router_with(&static_config(), port);

    let response = app
        .oneshot(chat_request(json!({ "message": "hi", "context": "home" })))
        .await
        .unwrap();

    let body = json_body(response).await.to_string();
    assert!(!body.contains("model overloaded"));
    assert!(!body.contains("503"));
}

#[tokio::test]
async fn unknown_context_falls_back_to_the_default_persona() {
    let port = ScriptedPort::new(0, "ok");
    let app = router_with(&static_config(), port.clone());

    let response = app
        .oneshot(chat_request(json!({ "message": "hello", "context": "xyz" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(port.seen_prompts()[0].contains("financial concierge"));
}

#[tokio::test]
async fn missing_fields_are_tolerated() {
    let port = ScriptedPort::new(0, "ok");
    let app = router_with(&static_config(), port.clone());

    let response = app.oneshot(chat_request(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(port.seen_prompts()[0].ends_with("User: "));
}

#[tokio::test]
async fn discovery_happens_once_across_requests() {
    let port = ScriptedPort::new(0, "ok");
    let ctx = promptgate_axum::bootstrap_with_port(&discovery_config(), port.clone());
    let state = std::sync::Arc::new(ctx);

    for _ in 0..2 {
        let outcome = state.chat.respond("hi", "home").await;
        assert!(matches!(
            outcome,
            promptgate_core::GenerationOutcome::Success { .. }
        ));
    }

    assert_eq!(port.list_calls(), 1);
    assert_eq!(port.generate_calls(), 2);
}

#[tokio::test]
async fn liveness_probe_answers_on_the_root_path() {
    let port = ScriptedPort::new(0, "unused");
    let app = router_with(&static_config(), port);

    let response = app
        .oneshot(
            axum::http::Request::builder()
                .method("GET")
                .uri("/")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
