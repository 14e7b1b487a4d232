//! Safety feedback returned by the service instead of (or alongside) content.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Harm category a safety rating applies to.
///
/// Unknown categories are kept verbatim in [`HarmCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(from = "String", into = "String")]
pub enum HarmCategory {
    #[strum(serialize = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[strum(serialize = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[strum(serialize = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[strum(serialize = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
    #[strum(serialize = "HARM_CATEGORY_CIVIC_INTEGRITY")]
    CivicIntegrity,
    #[strum(default)]
    Other(String),
}

impl HarmCategory {
    /// Wire name, e.g. `HARM_CATEGORY_HARASSMENT`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Harassment => "HARM_CATEGORY_HARASSMENT",
            Self::HateSpeech => "HARM_CATEGORY_HATE_SPEECH",
            Self::SexuallyExplicit => "HARM_CATEGORY_SEXUALLY_EXPLICIT",
            Self::DangerousContent => "HARM_CATEGORY_DANGEROUS_CONTENT",
            Self::CivicIntegrity => "HARM_CATEGORY_CIVIC_INTEGRITY",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for HarmCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for HarmCategory {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_else(|_| Self::Other(s))
    }
}

impl From<HarmCategory> for String {
    fn from(category: HarmCategory) -> Self {
        category.as_str().to_string()
    }
}

/// Probability that content is harmful in a given category.
///
/// Unknown levels read as [`HarmProbability::Unspecified`], the lowest.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmProbability {
    #[strum(serialize = "HARM_PROBABILITY_UNSPECIFIED")]
    Unspecified,
    Negligible,
    Low,
    Medium,
    High,
}

impl From<String> for HarmProbability {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Self::Unspecified)
    }
}

impl From<HarmProbability> for String {
    fn from(probability: HarmProbability) -> Self {
        probability.to_string()
    }
}

impl HarmProbability {
    /// Highest defined severity; the only level treated as a block cause.
    pub const MAX: HarmProbability = HarmProbability::High;
}

/// One per-category rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyRating {
    pub category: HarmCategory,
    pub probability: HarmProbability,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub blocked: bool,
}

impl SafetyRating {
    pub fn new(category: HarmCategory, probability: HarmProbability) -> Self {
        Self {
            category,
            probability,
            blocked: false,
        }
    }
}

/// Safety feedback attached to a response with no content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyFeedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_reason: Option<String>,
    #[serde(default)]
    pub safety_ratings: Vec<SafetyRating>,
}

impl SafetyFeedback {
    pub fn from_ratings(safety_ratings: Vec<SafetyRating>) -> Self {
        Self {
            block_reason: None,
            safety_ratings,
        }
    }

    /// True when the feedback carries nothing to report.
    pub fn is_empty(&self) -> bool {
        self.block_reason.is_none() && self.safety_ratings.is_empty()
    }
}
