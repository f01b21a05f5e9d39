use crate::app::state::AppState;
use crate::core::BatchResponse;
use axum::{body::Bytes, extract::State, Json};
use serde_json::{json, Value};

/// `POST /is-not-active/`
///
/// Always answers 200; request and lookup failures are reported in the body.
#[tracing::instrument(name = "check_inns", skip_all, fields(op = "handlers.check_inns"))]
pub async fn check_inns(State(state): State<AppState>, body: Bytes) -> Json<BatchResponse> {
    Json(state.checker.check(&body).await)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
