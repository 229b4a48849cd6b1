//! Deterministic completion stubs shared by the interview and router tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::completion::{CompletionError, CompletionProvider, Sampling};

/// One recorded `complete()` invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
    pub sampling: Sampling,
}

/// Records every call and returns a canned completion.
pub struct RecordingProvider {
    response: String,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingProvider {
    pub fn returning(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for RecordingProvider {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        sampling: Sampling,
    ) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: system.to_string(),
            user: user.to_string(),
            sampling,
        });
        Ok(self.response.clone())
    }
}

/// Always fails, simulating a provider-side error.
pub struct FailingProvider;

#[async_trait]
impl CompletionProvider for FailingProvider {
    async fn complete(
        &self,
        _system: &str,
        _user: &str,
        _sampling: Sampling,
    ) -> Result<String, CompletionError> {
        Err(CompletionError::Api {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        })
    }
}
