//! Convenience re-exports for common use.

pub use crate::config::FilmiConfig;
pub use crate::error::{FilmiError, Result};
pub use crate::generation::{build_prompt, interpret, interpret_result, JokeGenerator};
pub use crate::models::GoogleModel;
pub use crate::provider::{ModelProvider, ProviderRequest, ProviderResponse};
pub use crate::types::{
    Decade, GenerationSettings, HarmCategory, HarmProbability, JokeRequest, SafetyFeedback,
    SafetyRating, ServiceResponse,
};
