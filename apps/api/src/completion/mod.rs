/// Completion client — the single point of entry for all LLM provider calls
/// in Mockmate.
///
/// ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
/// All completion requests MUST go through this module.
///
/// Model: gpt-3.5-turbo (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all completion calls in Mockmate.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Provider returned no choices")]
    EmptyChoices,
}

/// Sampling parameters for a single completion call.
/// Each endpoint fixes its own values; nothing here is user-tunable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// The narrow capability seam between the handlers and the provider.
///
/// Carried in `AppState` as `Arc<dyn CompletionProvider>` so tests can swap
/// in a deterministic stub instead of a live network dependency.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Submits a two-message conversation (system instruction + user prompt)
    /// and returns the first completion's text verbatim.
    async fn complete(
        &self,
        system: &str,
        user: &str,
        sampling: Sampling,
    ) -> Result<String, CompletionError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (OpenAI Chat Completions)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
}

impl ChatResponse {
    /// Extracts the text of the first choice. The content is treated as
    /// opaque — even when the prompt asks for JSON, nothing here parses it.
    fn into_text(mut self) -> Result<String, CompletionError> {
        if self.choices.is_empty() {
            return Err(CompletionError::EmptyChoices);
        }
        Ok(self.choices.remove(0).message.content)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// OpenAI client
// ────────────────────────────────────────────────────────────────────────────

/// The production provider. Wraps the OpenAI Chat Completions API.
///
/// Failures propagate unmodified to the caller — no retries, no backoff,
/// no translation between failure causes.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        sampling: Sampling,
    ) -> Result<String, CompletionError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: sampling.temperature,
            max_tokens: sampling.max_tokens,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the provider's error message
            let message = serde_json::from_str::<OpenAiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "Completion call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        chat_response.into_text()
    }
}
