//! One joke request, one service call.

use tracing::{debug, warn};

use crate::error::FilmiError;
use crate::provider::{ModelProvider, ProviderRequest};
use crate::types::{GenerationSettings, JokeRequest, ServiceResponse};

use super::interpret::{blocked_categories, interpret_result};
use super::prompt::build_prompt;

/// Generates jokes through an injected provider.
///
/// Holds no per-request state; each call is independent.
pub struct JokeGenerator {
    provider: Box<dyn ModelProvider>,
    settings: GenerationSettings,
}

impl JokeGenerator {
    pub fn new(provider: Box<dyn ModelProvider>) -> Self {
        Self {
            provider,
            settings: GenerationSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Call the service once and classify what came back.
    pub async fn generate(&self, request: &JokeRequest) -> Result<ServiceResponse, FilmiError> {
        let prompt = build_prompt(request);
        debug!(
            provider = self.provider.provider_name(),
            model = self.provider.model_id(),
            prompt_len = prompt.len(),
            "generating jokes"
        );

        let provider_request = ProviderRequest::new(prompt, self.settings.clone());
        let response = self.provider.generate_content(&provider_request).await?;
        debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            finish_reason = ?response.finish_reason,
            "provider responded"
        );

        let classified = ServiceResponse::from(response);
        match &classified {
            ServiceResponse::Blocked(feedback) => {
                let high = blocked_categories(feedback).len();
                warn!(
                    block_reason = feedback.block_reason.as_deref().unwrap_or("none"),
                    high_categories = high,
                    "response blocked by safety filters"
                );
            }
            ServiceResponse::Empty => warn!("provider returned no content and no feedback"),
            ServiceResponse::Text(_) => {}
        }
        Ok(classified)
    }

    /// Call the service and render the outcome; every path yields a string.
    pub async fn generate_display(&self, request: &JokeRequest) -> String {
        let result = self.generate(request).await;
        if let Err(e) = &result {
            warn!(error = %e, category = ?e.category(), "joke generation failed");
        }
        interpret_result(result)
    }
}
