use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use valq_core::types::GenerationRequest;

use crate::server::AppState;

/// POST /api/onboarding/questions
///
/// The body must be JSON; anything else is a client error. Field-level
/// garbage inside a valid JSON body never errors: the request type defaults
/// and clamps, and the pipeline itself cannot fail.
pub async fn questions(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "invalid JSON body"})),
        )
            .into_response();
    };

    let request = GenerationRequest::from_value(&body);
    let result = state.pipeline.produce(&request).await;
    Json(result).into_response()
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({"ok": true}))
}

/// Fallback for unknown routes, mirroring the JSON error envelope.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))).into_response()
}
