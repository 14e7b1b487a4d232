//! Google Gemini model definitions.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Google Gemini models.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString)]
#[serde(from = "String", into = "String")]
pub enum GoogleModel {
    #[strum(serialize = "gemini-pro")]
    GeminiPro,
    #[strum(serialize = "gemini-1.5-pro")]
    Gemini15Pro,
    #[strum(serialize = "gemini-1.5-flash")]
    Gemini15Flash,
    #[default]
    #[strum(serialize = "gemini-2.0-flash")]
    Gemini20Flash,
    #[strum(serialize = "gemini-2.5-flash")]
    Gemini25Flash,
    #[strum(serialize = "gemini-2.5-flash-lite")]
    Gemini25FlashLite,
    #[strum(serialize = "gemini-2.5-pro")]
    Gemini25Pro,
    /// Custom/unknown Google model.
    #[strum(default)]
    Custom(String),
}

impl GoogleModel {
    pub fn as_str(&self) -> &str {
        match self {
            Self::GeminiPro => "gemini-pro",
            Self::Gemini15Pro => "gemini-1.5-pro",
            Self::Gemini15Flash => "gemini-1.5-flash",
            Self::Gemini20Flash => "gemini-2.0-flash",
            Self::Gemini25Flash => "gemini-2.5-flash",
            Self::Gemini25FlashLite => "gemini-2.5-flash-lite",
            Self::Gemini25Pro => "gemini-2.5-pro",
            Self::Custom(s) => s,
        }
    }
}

impl fmt::Display for GoogleModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for GoogleModel {
    fn from(s: String) -> Self {
        let trimmed = s.trim().trim_start_matches("models/");
        trimmed
            .parse()
            .unwrap_or_else(|_| Self::Custom(trimmed.to_string()))
    }
}

impl From<GoogleModel> for String {
    fn from(model: GoogleModel) -> Self {
        model.as_str().to_string()
    }
}
