//! Turning a service response into the one string shown to the user.

use crate::error::FilmiError;
use crate::types::{HarmCategory, HarmProbability, SafetyFeedback, ServiceResponse};

/// Shown when the service returned neither content nor feedback.
pub const EMPTY_RESPONSE_MESSAGE: &str =
    "The response was empty. Please try adjusting your parameters.";

/// Categories rated at the highest severity, in response order.
pub fn blocked_categories(feedback: &SafetyFeedback) -> Vec<&HarmCategory> {
    feedback
        .safety_ratings
        .iter()
        .filter(|rating| rating.probability == HarmProbability::MAX)
        .map(|rating| &rating.category)
        .collect()
}

/// Render a classified response.
pub fn interpret(response: &ServiceResponse) -> String {
    match response {
        ServiceResponse::Text(text) => text.clone(),
        ServiceResponse::Blocked(feedback) => {
            let names: Vec<&str> = blocked_categories(feedback)
                .into_iter()
                .map(HarmCategory::as_str)
                .collect();
            format!(
                "Response was blocked due to safety concerns in the following categories: {}. \
                 Please try adjusting your parameters.",
                names.join(", ")
            )
        }
        ServiceResponse::Empty => EMPTY_RESPONSE_MESSAGE.to_string(),
    }
}

/// Render the outcome of a service call, faults included.
pub fn interpret_result(result: Result<ServiceResponse, FilmiError>) -> String {
    match result {
        Ok(response) => interpret(&response),
        Err(e) => format!("An error occurred: {e}"),
    }
}
