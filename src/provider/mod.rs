//! Model provider trait and implementations.

pub mod http;

#[cfg(feature = "google")]
pub mod google;

use async_trait::async_trait;

use crate::config::FilmiConfig;
use crate::error::FilmiError;
use crate::types::{FinishReason, GenerationSettings, SafetyFeedback, SafetyRating, Usage};

/// A single-prompt request sent to a model provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub prompt: String,
    pub settings: GenerationSettings,
}

impl ProviderRequest {
    pub fn new(prompt: impl Into<String>, settings: GenerationSettings) -> Self {
        Self {
            prompt: prompt.into(),
            settings,
        }
    }
}

/// Raw response from a provider, before classification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderResponse {
    /// Concatenated text of the first candidate, if it had any parts.
    pub text: Option<String>,
    /// Prompt-level safety feedback.
    pub prompt_feedback: Option<SafetyFeedback>,
    /// Safety ratings attached to the first candidate.
    pub candidate_safety_ratings: Vec<SafetyRating>,
    pub finish_reason: Option<FinishReason>,
    pub usage: Usage,
}

/// Core trait implemented by all model providers.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Provider name (e.g., "google").
    fn provider_name(&self) -> &str;
    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Send one prompt and return the raw response.
    async fn generate_content(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, FilmiError>;
}

/// Create the configured provider.
#[cfg(feature = "google")]
pub fn create_provider(config: &FilmiConfig) -> Result<Box<dyn ModelProvider>, FilmiError> {
    let api_key = config
        .api_key()
        .ok_or_else(|| FilmiError::Authentication("Missing GOOGLE_API_KEY".into()))?;
    Ok(Box::new(google::GoogleProvider::new(
        config.model(),
        api_key,
        config.base_url(),
    )))
}

/// Create the configured provider.
#[cfg(not(feature = "google"))]
pub fn create_provider(config: &FilmiConfig) -> Result<Box<dyn ModelProvider>, FilmiError> {
    Err(FilmiError::ModelNotFound(format!(
        "Provider for model '{}' not enabled via feature flags",
        config.model()
    )))
}
