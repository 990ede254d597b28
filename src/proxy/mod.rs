pub mod dtos;
pub mod handlers;

use crate::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/llm", post(handlers::dispatch))
        .route("/healthz", get(crate::health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
