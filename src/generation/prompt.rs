//! Prompt construction.

use crate::types::JokeRequest;

/// Build the instruction text for a joke request.
///
/// Pure and deterministic: identical requests always yield identical prompts.
///
/// ```
/// use filmi::generation::build_prompt;
/// use filmi::types::{Decade, JokeRequest};
///
/// let request = JokeRequest::new("cricket", Decade::Nineties, 3, 2).unwrap();
/// let prompt = build_prompt(&request);
/// assert!(prompt.starts_with("Generate 3 Bollywood jokes about cricket from the 1990s decade."));
/// ```
pub fn build_prompt(request: &JokeRequest) -> String {
    format!(
        "Generate {count} Bollywood jokes about {topic} from the {decade} decade.\n\
         The jokes should have a humor level of {humor} out of 5, where 1 is very mild and 5 is edgy but not offensive.\n\
         Format the jokes as a numbered list.",
        count = request.count(),
        topic = request.topic(),
        decade = request.decade(),
        humor = request.humor_scale(),
    )
}
