//! Answer evaluation — builds a prompt embedding the question and answer
//! verbatim, issues exactly one completion call, and returns the raw model
//! text as the evaluation.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::completion::{CompletionProvider, Sampling};
use crate::errors::AppError;
use crate::interview::prompts::{
    EVALUATION_DEFAULT_STYLE, EVALUATION_PROMPT_TEMPLATE, EVALUATION_SYSTEM,
};
use crate::styles::StyleTable;

/// Sampling for evaluation. Lower temperature for consistent judgments.
const EVALUATION_SAMPLING: Sampling = Sampling {
    temperature: 0.3,
    max_tokens: 400,
};

/// Request body for answer evaluation. `question` and `answer` are required
/// (missing fields are rejected by the extractor); empty strings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalRequest {
    #[serde(default = "default_company")]
    pub company: String,
    pub question: String,
    pub answer: String,
}

fn default_company() -> String {
    "General".to_string()
}

/// Response envelope. `evaluation` is the raw model text.
#[derive(Debug, Clone, Serialize)]
pub struct EvalResponse {
    pub evaluation: String,
}

/// Builds the evaluation prompt. Question and answer are embedded verbatim,
/// never truncated or escaped.
pub fn build_evaluation_prompt(company: &str, style: &str, question: &str, answer: &str) -> String {
    EVALUATION_PROMPT_TEMPLATE
        .replace("{company}", company)
        .replace("{style}", style)
        .replace("{question}", question)
        .replace("{answer}", answer)
}

/// Evaluates a candidate answer via one completion call.
pub async fn evaluate_answer(
    provider: &dyn CompletionProvider,
    styles: &StyleTable,
    request: EvalRequest,
) -> Result<EvalResponse, AppError> {
    let style = styles.lookup(&request.company, EVALUATION_DEFAULT_STYLE);
    let prompt =
        build_evaluation_prompt(&request.company, style, &request.question, &request.answer);

    info!("Evaluating answer for {}", request.company);

    let evaluation = provider
        .complete(EVALUATION_SYSTEM, &prompt, EVALUATION_SAMPLING)
        .await?;

    Ok(EvalResponse { evaluation })
}
