//! Shared HTTP client and error mapping.

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

use crate::error::FilmiError;

/// Request timeout for the shared client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
pub fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(2)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    })
}

/// Map a non-success HTTP status and body to an error.
pub fn status_to_error(status: u16, body: &str) -> FilmiError {
    let message = extract_error_message(body).unwrap_or_else(|| body.to_string());
    match status {
        401 | 403 => FilmiError::Authentication(message),
        429 => FilmiError::RateLimited { message },
        _ => FilmiError::api(status, message),
    }
}

#[derive(Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Deserialize)]
struct GoogleErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Pull `error.message` out of a Google API error envelope.
fn extract_error_message(body: &str) -> Option<String> {
    let envelope: GoogleErrorEnvelope = serde_json::from_str(body).ok()?;
    match (envelope.error.message, envelope.error.status) {
        (Some(message), Some(status)) => Some(format!("{message} ({status})")),
        (Some(message), None) => Some(message),
        (None, Some(status)) => Some(status),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_error_envelope_message_is_used() {
        let body = r#"{"error":{"code":429,"message":"Resource has been exhausted (e.g. check quota).","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = status_to_error(429, body);
        match err {
            FilmiError::RateLimited { message } => {
                assert_eq!(
                    message,
                    "Resource has been exhausted (e.g. check quota). (RESOURCE_EXHAUSTED)"
                );
            }
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[test]
    fn auth_statuses_map_to_authentication() {
        assert!(matches!(
            status_to_error(403, "forbidden"),
            FilmiError::Authentication(_)
        ));
        assert!(matches!(
            status_to_error(401, "nope"),
            FilmiError::Authentication(_)
        ));
    }

    #[test]
    fn plain_body_is_kept_verbatim() {
        let err = status_to_error(500, "upstream exploded");
        assert_eq!(err.to_string(), "API error (status 500): upstream exploded");
    }
}
