//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared chat service.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, Method, StatusCode, header, request::Parts};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use promptgate_core::OriginPolicy;

use crate::bootstrap::GatewayContext;
use crate::handlers;
use crate::state::AppState;

/// Build the CORS layer enforcing the origin admission policy on headers.
///
/// The policy runs as a predicate per request, so suffix and prefix rules
/// apply without enumerating every admissible origin up front. Only GET and
/// POST are advertised; preflights for other methods are refused.
fn build_cors_layer(policy: OriginPolicy) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _: &Parts| policy.admits(origin.to_str().ok()),
        ))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Terminate API requests whose declared origin fails admission.
///
/// The CORS layer only withholds response headers on actual requests, so
/// enforcement happens here, before any handler or upstream call runs.
/// Preflights never reach this layer; the CORS layer answers them directly.
async fn enforce_origin(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok());

    if state.policy.admits(origin) {
        next.run(request).await
    } else {
        StatusCode::FORBIDDEN.into_response()
    }
}

/// Build all API routes without the `/api` prefix (for nesting under /api).
///
/// Returns a router typed as `Router<AppState>` without `.with_state()`
/// applied; the caller supplies the state before nesting.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new().route("/chat", post(handlers::chat::chat))
}

/// Create the main router: the liveness probe at the root plus the API
/// routes nested under `/api` behind origin enforcement. The CORS layer
/// wraps the whole router so preflights succeed on every path.
pub fn create_router(ctx: GatewayContext) -> Router {
    let cors = build_cors_layer(ctx.policy.clone());
    let state: AppState = Arc::new(ctx);

    let api = api_routes()
        .layer(middleware::from_fn_with_state(state.clone(), enforce_origin))
        .with_state(state);

    Router::new()
        .route("/", get(liveness))
        .nest("/api", api)
        .layer(cors)
}

/// Liveness probe for deployment health checks.
pub(crate) async fn liveness() -> &'static str {
    "Promptgate is running"
}
