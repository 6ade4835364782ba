//! Normalized response handed back by `execute`.
//!
//! # Design
//! Exactly one of `success_response` / `error_response` is populated per
//! response, chosen purely by status-code range. The body is JSON-parsed
//! when parseable; anything else (HTML error pages, plain-text bodies,
//! empty 204 bodies) is carried unchanged as a JSON string value. A parse
//! failure is never an error: non-JSON bodies are expected for both
//! success and error statuses.

use serde_json::Value;

/// Outcome of one HTTP round trip, classified by status code.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientResponse {
    /// Integer HTTP status of the exchange.
    pub status_code: u16,
    /// Parsed body when the status is in 200..=299, `None` otherwise.
    pub success_response: Option<Value>,
    /// Parsed body when the status is outside 200..=299, `None` otherwise.
    pub error_response: Option<Value>,
}

impl ClientResponse {
    /// Build a response from a raw status and body text, applying the
    /// parse-with-raw-fallback rule and the status classification.
    pub fn from_raw(status_code: u16, text: &str) -> Self {
        let body = serde_json::from_str(text)
            .unwrap_or_else(|_| Value::String(text.to_string()));
        if (200..=299).contains(&status_code) {
            Self {
                status_code,
                success_response: Some(body),
                error_response: None,
            }
        } else {
            Self {
                status_code,
                success_response: None,
                error_response: Some(body),
            }
        }
    }

    /// Whether the status fell in the 2xx range.
    pub fn was_successful(&self) -> bool {
        (200..=299).contains(&self.status_code)
    }
}
