//! Question generation — builds a prompt from the request parameters and the
//! company style hint, issues exactly one completion call, and returns the
//! raw model text in the response envelope.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::completion::{CompletionProvider, Sampling};
use crate::errors::AppError;
use crate::interview::prompts::{
    QUESTION_DEFAULT_STYLE, QUESTION_PROMPT_TEMPLATE, QUESTION_SYSTEM,
};
use crate::styles::StyleTable;

/// Sampling for question generation. Higher temperature for variety.
const QUESTION_SAMPLING: Sampling = Sampling {
    temperature: 0.7,
    max_tokens: 600,
};

/// Request body for question generation. All fields optional with defaults.
/// `count` is deliberately not range-checked.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRequest {
    #[serde(default = "default_company")]
    pub company: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_count")]
    pub count: i64,
}

fn default_company() -> String {
    "General".to_string()
}

fn default_role() -> String {
    "Software Engineer".to_string()
}

fn default_count() -> i64 {
    3
}

/// Response envelope. `questions` is the raw model text — NOT guaranteed to
/// be valid JSON despite the prompt's instruction; callers must tolerate
/// malformed payloads.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub company: String,
    pub role: String,
    pub questions: String,
}

/// Builds the question generation prompt for the given parameters.
pub fn build_question_prompt(company: &str, role: &str, count: i64, style: &str) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{role}", role)
        .replace("{company}", company)
        .replace("{style}", style)
}

/// Generates interview questions via one completion call.
///
/// Provider failures propagate unmodified — no retry, no fallback.
pub async fn generate_questions(
    provider: &dyn CompletionProvider,
    styles: &StyleTable,
    request: QuestionRequest,
) -> Result<QuestionResponse, AppError> {
    let style = styles.lookup(&request.company, QUESTION_DEFAULT_STYLE);
    let prompt = build_question_prompt(&request.company, &request.role, request.count, style);

    info!(
        "Generating {} questions for {} at {}",
        request.count, request.role, request.company
    );

    let questions = provider
        .complete(QUESTION_SYSTEM, &prompt, QUESTION_SAMPLING)
        .await?;

    Ok(QuestionResponse {
        company: request.company,
        role: request.role,
        questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::test_support::{FailingProvider, RecordingProvider};
    use serde_json::json;

    #[test]
    fn test_request_defaults_apply_to_empty_body() {
        let request: QuestionRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.company, "General");
        assert_eq!(request.role, "Software Engineer");
        assert_eq!(request.count, 3);
    }

    #[test]
    fn test_prompt_embeds_literal_parameters() {
        let prompt = build_question_prompt(
            "Google",
            "Backend Engineer",
            2,
            "Focus on algorithms, system design, and problem-solving depth.",
        );
        assert!(prompt.contains("2 interview questions for Backend Engineer role at Google"));
        assert!(prompt.contains(
            "Company style: Focus on algorithms, system design, and problem-solving depth."
        ));
        assert!(prompt.contains("Return JSON array with fields id, question, type, hint."));
    }

    #[tokio::test]
    async fn test_generate_issues_exactly_one_call() {
        let provider = RecordingProvider::returning("[]");
        let styles = StyleTable::builtin();
        let request: QuestionRequest = serde_json::from_value(json!({
            "company": "Google", "role": "Backend Engineer", "count": 2
        }))
        .unwrap();

        let response = generate_questions(&provider, &styles, request)
            .await
            .unwrap();

        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system, QUESTION_SYSTEM);
        assert!(calls[0]
            .user
            .contains("2 interview questions for Backend Engineer role at Google"));
        assert_eq!(calls[0].sampling, QUESTION_SAMPLING);
        assert_eq!(response.company, "Google");
        assert_eq!(response.role, "Backend Engineer");
        assert_eq!(response.questions, "[]");
    }

    #[tokio::test]
    async fn test_unknown_company_uses_question_default_style() {
        let provider = RecordingProvider::returning("ok");
        let styles = StyleTable::builtin();
        let request: QuestionRequest = serde_json::from_value(json!({})).unwrap();

        generate_questions(&provider, &styles, request)
            .await
            .unwrap();

        let calls = provider.calls();
        assert!(calls[0]
            .user
            .contains("Company style: Balanced technical + behavioral."));
    }

    #[tokio::test]
    async fn test_malformed_model_text_passes_through_unvalidated() {
        // The prompt asks for JSON, but plain prose must still be returned as-is.
        let provider = RecordingProvider::returning("Sure! Here are your questions:");
        let styles = StyleTable::builtin();
        let request: QuestionRequest = serde_json::from_value(json!({})).unwrap();

        let response = generate_questions(&provider, &styles, request)
            .await
            .unwrap();
        assert_eq!(response.questions, "Sure! Here are your questions:");
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let provider = FailingProvider;
        let styles = StyleTable::builtin();
        let request: QuestionRequest = serde_json::from_value(json!({})).unwrap();

        let result = generate_questions(&provider, &styles, request).await;
        assert!(matches!(result, Err(AppError::Completion(_))));
    }
}
