use crate::interface_adapters::handlers::{health, submit_score, top_scores};
use crate::interface_adapters::state::AppState;
use axum::{
    routing::get,
    Router,
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/score", get(top_scores).post(submit_score))
        .route("/api/health", get(health))
        .with_state(state)
}
