//! Shared test helpers and stub provider.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use filmi::error::FilmiError;
use filmi::provider::{ModelProvider, ProviderRequest, ProviderResponse};
use filmi::types::*;

/// A stub provider that returns queued outcomes and records every request.
pub struct StubProvider {
    outcomes: Mutex<Vec<Result<ProviderResponse, FilmiError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

#[allow(dead_code)]
impl StubProvider {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a plain text response.
    pub fn queue_text(&self, text: &str) {
        self.queue(Ok(ProviderResponse {
            text: Some(text.to_string()),
            finish_reason: Some(FinishReason::Stop),
            usage: Usage {
                input_tokens: 10,
                output_tokens: 20,
                total_tokens: 30,
            },
            ..Default::default()
        }));
    }

    /// Queue a prompt-level block with the given ratings.
    pub fn queue_blocked(&self, ratings: Vec<SafetyRating>) {
        self.queue(Ok(ProviderResponse {
            prompt_feedback: Some(SafetyFeedback {
                block_reason: Some("SAFETY".to_string()),
                safety_ratings: ratings,
            }),
            ..Default::default()
        }));
    }

    /// Queue a response with no content and no feedback.
    pub fn queue_empty(&self) {
        self.queue(Ok(ProviderResponse::default()));
    }

    /// Queue a fault.
    pub fn queue_error(&self, error: FilmiError) {
        self.queue(Err(error));
    }

    pub fn queue(&self, outcome: Result<ProviderResponse, FilmiError>) {
        self.outcomes.lock().unwrap().push(outcome);
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelProvider for StubProvider {
    fn provider_name(&self) -> &str {
        "stub"
    }

    fn model_id(&self) -> &str {
        "stub-model"
    }

    async fn generate_content(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, FilmiError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Ok(ProviderResponse::default());
        }
        outcomes.remove(0)
    }
}

/// Forwards to a shared stub so tests can inspect it after handing it off.
pub struct SharedStub(pub Arc<StubProvider>);

#[async_trait]
impl ModelProvider for SharedStub {
    fn provider_name(&self) -> &str {
        self.0.provider_name()
    }

    fn model_id(&self) -> &str {
        self.0.model_id()
    }

    async fn generate_content(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, FilmiError> {
        self.0.generate_content(request).await
    }
}
