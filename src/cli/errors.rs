//! CLI-specific error formatting for user-facing messages.

use crate::config::CONFIG_PATH_ENV;
use crate::error::{FilmiError, RecoverySuggestion};

/// Map a [`FilmiError`] to a user-facing help string with actionable guidance.
pub fn format_error_help(err: &FilmiError) -> String {
    if let FilmiError::InvalidArgument(msg) = err {
        return msg.clone();
    }
    match recovery_hint(err.recovery_suggestion()) {
        Some(hint) => format!("{err}. {hint}"),
        None => format!("{err}"),
    }
}

fn recovery_hint(suggestion: RecoverySuggestion) -> Option<String> {
    match suggestion {
        RecoverySuggestion::CheckCredentials => {
            Some("Set GOOGLE_API_KEY in your environment or a .env file".to_string())
        }
        RecoverySuggestion::CheckConfiguration => {
            Some(format!("Check your .env or ${CONFIG_PATH_ENV} config file"))
        }
        RecoverySuggestion::TryAgainLater => Some("Try again in a moment".to_string()),
        RecoverySuggestion::IncreaseTimeout => {
            Some("The service did not answer in time. Try fewer jokes or try again".to_string())
        }
        RecoverySuggestion::CheckInput | RecoverySuggestion::ContactSupport => None,
    }
}
