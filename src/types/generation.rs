//! Generation settings and related enums.

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Settings controlling text generation.
///
/// Only fields that are set are forwarded to the service.
///
/// ```
/// use filmi::types::GenerationSettings;
///
/// let settings = GenerationSettings::builder().temperature(0.9).build();
/// assert_eq!(settings.temperature, Some(0.9));
/// assert!(settings.max_tokens.is_none());
/// ```
#[derive(Debug, Clone, Builder, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GenerationSettings {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub top_k: Option<u32>,
}

impl GenerationSettings {
    /// Overlay `other` on top of `self`; set fields in `other` win.
    pub fn merged_with(&self, other: &GenerationSettings) -> GenerationSettings {
        GenerationSettings {
            max_tokens: other.max_tokens.or(self.max_tokens),
            temperature: other.temperature.or(self.temperature),
            top_p: other.top_p.or(self.top_p),
            top_k: other.top_k.or(self.top_k),
        }
    }
}

/// Why generation finished. Only a safety stop changes how a reply is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    ContentFilter,
    Other,
}

impl FinishReason {
    /// Map a Gemini `finishReason` value.
    pub fn from_gemini(reason: &str) -> Self {
        match reason {
            "STOP" => Self::Stop,
            "SAFETY" | "BLOCKLIST" | "PROHIBITED_CONTENT" | "SPII" => Self::ContentFilter,
            _ => Self::Other,
        }
    }
}
