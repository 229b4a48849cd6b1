pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/generate-questions",
            post(handlers::handle_generate_questions),
        )
        .route("/evaluate-answer", post(handlers::handle_evaluate_answer))
        .with_state(state)
}
