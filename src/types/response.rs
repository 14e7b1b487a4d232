//! Classified service response.

use crate::provider::ProviderResponse;

use super::{FinishReason, SafetyFeedback};

/// What the service handed back, reduced to the three cases callers act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceResponse {
    /// Non-empty generated content.
    Text(String),
    /// No content; the service attached safety feedback.
    Blocked(SafetyFeedback),
    /// No content and no feedback.
    Empty,
}

impl From<ProviderResponse> for ServiceResponse {
    fn from(response: ProviderResponse) -> Self {
        if let Some(text) = response.text.filter(|t| !t.is_empty()) {
            return Self::Text(text);
        }

        if let Some(feedback) = response.prompt_feedback.filter(|f| !f.is_empty()) {
            return Self::Blocked(feedback);
        }

        // Gemini reports candidate-level blocks on the candidate, not the prompt.
        if response.finish_reason == Some(FinishReason::ContentFilter)
            && !response.candidate_safety_ratings.is_empty()
        {
            return Self::Blocked(SafetyFeedback::from_ratings(
                response.candidate_safety_ratings,
            ));
        }

        Self::Empty
    }
}
