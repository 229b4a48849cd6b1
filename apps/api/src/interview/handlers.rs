//! Axum route handlers for the interview endpoints.
//!
//! Missing required fields never reach these handlers — the `Json` extractor
//! rejects malformed bodies with 422 before any completion call is issued.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::interview::evaluation::{evaluate_answer, EvalRequest, EvalResponse};
use crate::interview::questions::{generate_questions, QuestionRequest, QuestionResponse};
use crate::state::AppState;

/// POST /generate-questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    let response = generate_questions(state.provider.as_ref(), &state.styles, request).await?;
    Ok(Json(response))
}

/// POST /evaluate-answer
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(request): Json<EvalRequest>,
) -> Result<Json<EvalResponse>, AppError> {
    let response = evaluate_answer(state.provider.as_ref(), &state.styles, request).await?;
    Ok(Json(response))
}
