//! Shared helpers for the adapter integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use serde_json::Value;

use promptgate_axum::{ServerConfig, bootstrap_with_port, create_router};
use promptgate_core::ports::{GenAiPort, GenAiPortError, GenAiPortResult, UpstreamModel};

/// Upstream fake that fails the first `fail_first` generate calls, then
/// succeeds, recording every call it sees.
pub struct ScriptedPort {
    fail_first: usize,
    reply: String,
    listing: Vec<UpstreamModel>,
    generate_calls: AtomicUsize,
    list_calls: AtomicUsize,
    seen_prompts: Mutex<Vec<String>>,
}

impl ScriptedPort {
    pub fn new(fail_first: usize, reply: &str) -> Arc<Self> {
        Arc::new(Self {
            fail_first,
            reply: reply.to_string(),
            listing: vec![UpstreamModel {
                name: "models/gemini-1.5-flash".to_string(),
                generation_methods: vec!["generateContent".to_string()],
            }],
            generate_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            seen_prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn always_failing() -> Arc<Self> {
        Self::new(usize::MAX, "")
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn seen_prompts(&self) -> Vec<String> {
        self.seen_prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenAiPort for ScriptedPort {
    async fn list_models(&self) -> GenAiPortResult<Vec<UpstreamModel>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.listing.clone())
    }

    async fn generate(&self, _model: &str, prompt: &str) -> GenAiPortResult<String> {
        let attempt = self.generate_calls.fetch_add(1, Ordering::SeqCst);
        self.seen_prompts.lock().unwrap().push(prompt.to_string());

        if attempt < self.fail_first {
            Err(GenAiPortError::UpstreamStatus {
                status: 503,
                body: "model overloaded".to_string(),
            })
        } else {
            Ok(self.reply.clone())
        }
    }
}

/// Config with a fixed two-candidate chain, suitable for most tests.
pub fn static_config() -> ServerConfig {
    ServerConfig {
        port: 0,
        api_key: "test-key".to_string(),
        static_models: Some(vec![
            "gemini-1.5-flash".to_string(),
            "gemini-pro".to_string(),
        ]),
        ..ServerConfig::with_defaults()
    }
}

/// Config with discovery mode enabled.
pub fn discovery_config() -> ServerConfig {
    ServerConfig {
        port: 0,
        api_key: "test-key".to_string(),
        static_models: None,
        ..ServerConfig::with_defaults()
    }
}

/// Build the full router around a scripted upstream.
pub fn router_with(config: &ServerConfig, port: Arc<ScriptedPort>) -> Router {
    create_router(bootstrap_with_port(config, port))
}

/// A POST /api/chat request with a JSON body.
pub fn chat_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Collect and parse a JSON response body.
pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
