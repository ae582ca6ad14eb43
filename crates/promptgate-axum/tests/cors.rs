//! CORS layer tests: preflight admission, rejection, and the advertised
//! method set.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use common::{ScriptedPort, chat_request, router_with, static_config};

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri("/api/chat")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn preflight_from_an_allowed_origin_is_admitted() {
    let app = router_with(&static_config(), ScriptedPort::new(0, "ok"));

    let response = app
        .oneshot(preflight("https://www.finovatools.com"))
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("https://www.finovatools.com")
    );
}

#[tokio::test]
async fn preflight_from_a_trusted_subdomain_is_admitted() {
    let app = router_with(&static_config(), ScriptedPort::new(0, "ok"));

    let response = app
        .oneshot(preflight("https://app.finovatools.com"))
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[tokio::test]
async fn preflight_from_an_unknown_origin_gets_no_allow_header() {
    let app = router_with(&static_config(), ScriptedPort::new(0, "ok"));

    let response = app.oneshot(preflight("https://evil.example")).await.unwrap();

    assert!(
        !response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[tokio::test]
async fn preflight_advertises_only_get_and_post() {
    let app = router_with(&static_config(), ScriptedPort::new(0, "ok"));

    let response = app
        .oneshot(preflight("http://localhost:5500"))
        .await
        .unwrap();

    let methods = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(methods.contains("GET"));
    assert!(methods.contains("POST"));
    assert!(!methods.contains("DELETE"));
    assert!(!methods.contains("PUT"));
}

#[tokio::test]
async fn actual_request_with_rejected_origin_is_terminated_before_the_core() {
    let port = ScriptedPort::new(0, "unused");
    let app = router_with(&static_config(), port.clone());

    let mut request = chat_request(serde_json::json!({ "message": "hi", "context": "home" }));
    request
        .headers_mut()
        .insert(header::ORIGIN, "https://evil.example".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    // The upstream port is never consulted for a rejected origin.
    assert_eq!(port.generate_calls(), 0);
}

#[tokio::test]
async fn preflight_succeeds_on_the_root_path() {
    let app = router_with(&static_config(), ScriptedPort::new(0, "ok"));

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/")
        .header(header::ORIGIN, "https://www.finovatools.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[tokio::test]
async fn actual_request_with_admitted_origin_carries_the_allow_header() {
    let app = router_with(&static_config(), ScriptedPort::new(0, "ok"));

    let mut request = chat_request(serde_json::json!({ "message": "hi", "context": "home" }));
    request
        .headers_mut()
        .insert(header::ORIGIN, "http://localhost:5500".parse().unwrap());

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[tokio::test]
async fn request_without_an_origin_header_is_served() {
    let app = router_with(&static_config(), ScriptedPort::new(0, "ok"));

    let response = app
        .oneshot(chat_request(serde_json::json!({ "message": "hi", "context": "home" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
