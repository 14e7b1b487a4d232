//! The joke request assembled from user input.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{FilmiError, Result};

/// Smallest number of jokes a request may ask for.
pub const MIN_COUNT: u8 = 1;
/// Largest number of jokes a request may ask for.
pub const MAX_COUNT: u8 = 10;
/// Default number of jokes.
pub const DEFAULT_COUNT: u8 = 5;

/// Mildest humor level.
pub const MIN_HUMOR: u8 = 1;
/// Edgiest humor level.
pub const MAX_HUMOR: u8 = 5;
/// Default humor level.
pub const DEFAULT_HUMOR: u8 = 3;

/// Shown when the topic is empty after trimming.
pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic.";

/// Bollywood decade a joke is set in.
///
/// Parses from either `"1990s"` or `"1990"` and always displays as `"1990s"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum Decade {
    #[default]
    #[serde(rename = "1950s")]
    #[strum(to_string = "1950s", serialize = "1950")]
    Fifties,
    #[serde(rename = "1960s")]
    #[strum(to_string = "1960s", serialize = "1960")]
    Sixties,
    #[serde(rename = "1970s")]
    #[strum(to_string = "1970s", serialize = "1970")]
    Seventies,
    #[serde(rename = "1980s")]
    #[strum(to_string = "1980s", serialize = "1980")]
    Eighties,
    #[serde(rename = "1990s")]
    #[strum(to_string = "1990s", serialize = "1990")]
    Nineties,
    #[serde(rename = "2000s")]
    #[strum(to_string = "2000s", serialize = "2000")]
    Aughts,
    #[serde(rename = "2010s")]
    #[strum(to_string = "2010s", serialize = "2010")]
    Tens,
    #[serde(rename = "2020s")]
    #[strum(to_string = "2020s", serialize = "2020")]
    Twenties,
}

impl Decade {
    /// Every selectable decade, oldest first.
    pub const ALL: [Decade; 8] = [
        Decade::Fifties,
        Decade::Sixties,
        Decade::Seventies,
        Decade::Eighties,
        Decade::Nineties,
        Decade::Aughts,
        Decade::Tens,
        Decade::Twenties,
    ];
}

/// A validated request for a batch of jokes.
///
/// Built per invocation and dropped once the response is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JokeRequest {
    topic: String,
    decade: Decade,
    count: u8,
    humor_scale: u8,
}

impl JokeRequest {
    /// Validate and build a request.
    ///
    /// The topic is trimmed and must be non-empty; `count` must lie in
    /// `1..=10` and `humor_scale` in `1..=5`.
    pub fn new(topic: impl Into<String>, decade: Decade, count: u8, humor_scale: u8) -> Result<Self> {
        let topic = topic.into().trim().to_string();
        if topic.is_empty() {
            return Err(FilmiError::InvalidArgument(EMPTY_TOPIC_MESSAGE.into()));
        }
        if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
            return Err(FilmiError::InvalidArgument(format!(
                "count must be between {MIN_COUNT} and {MAX_COUNT}, got {count}"
            )));
        }
        if !(MIN_HUMOR..=MAX_HUMOR).contains(&humor_scale) {
            return Err(FilmiError::InvalidArgument(format!(
                "humor scale must be between {MIN_HUMOR} and {MAX_HUMOR}, got {humor_scale}"
            )));
        }
        Ok(Self {
            topic,
            decade,
            count,
            humor_scale,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn decade(&self) -> Decade {
        self.decade
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn humor_scale(&self) -> u8 {
        self.humor_scale
    }
}
