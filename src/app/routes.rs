use crate::app::handlers;
use crate::app::middleware::{
    propagate_request_id_layer, recover_layer, set_request_id_layer, timeout_layer, trace_layer,
};
use crate::app::state::AppState;
use crate::config::ServerConfig;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/is-not-active", post(handlers::check_inns))
        .route("/is-not-active/", post(handlers::check_inns))
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(timeout_layer(server.request_timeout()))
        .layer(recover_layer())
        .layer(trace_layer())
        .layer(propagate_request_id_layer())
        // outermost, so the trace span already sees the request id
        .layer(set_request_id_layer())
        .with_state(state)
}
