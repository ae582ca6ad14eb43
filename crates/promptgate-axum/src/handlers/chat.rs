//! Chat endpoint handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use promptgate_core::GenerationOutcome;

use crate::dto::{ChatReply, ChatRequest};
use crate::state::AppState;

/// Fixed reply returned when every model candidate has failed.
///
/// The upstream cause is logged server-side and never included here.
pub const EXHAUSTED_REPLY: &str = "I am having trouble connecting. Please check the server logs.";

/// POST /api/chat
///
/// Always answers with the `{ "reply": ... }` schema: 200 on success, 500
/// with the fixed apology when the fallback chain is exhausted.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> (StatusCode, Json<ChatReply>) {
    match state.chat.respond(&req.message, &req.context).await {
        GenerationOutcome::Success { reply } => (StatusCode::OK, Json(ChatReply { reply })),
        GenerationOutcome::Failure { cause } => {
            tracing::error!(context = %req.context, error = %cause, "chat generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatReply {
                    reply: EXHAUSTED_REPLY.to_string(),
                }),
            )
        }
    }
}
