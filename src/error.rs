//! Frontend Errors

use wasm_bindgen::{JsCast, JsValue};

/// Failure of a browser or HTTP operation
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Browser API unavailable or threw while building a request
    Browser(String),
    /// `fetch` rejected (offline, CORS, aborted)
    Network(String),
    /// Server answered with a non-2xx status
    Status { status: u16, message: String },
    /// Response body did not have the expected shape
    Decode(String),
}

impl ApiError {
    pub fn from_js(value: JsValue) -> Self {
        ApiError::Browser(js_message(&value))
    }

    pub fn network(value: JsValue) -> Self {
        ApiError::Network(js_message(&value))
    }
}

/// `Error.message` for thrown errors, the text itself for strings
fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Browser(msg) => write!(f, "Browser error: {}", msg),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { status, message } if message.is_empty() => write!(f, "Server error ({})", status),
            ApiError::Status { status, message } => write!(f, "{} ({})", message, status),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Selection precondition failures, raised before any request is made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NoObjectsToDelete,
    NoJobsToDownload,
    DecisionPairRequired,
}

impl ValidationError {
    /// Localized text for this error
    pub fn message(self, messages: &crate::models::Messages) -> String {
        match self {
            ValidationError::NoObjectsToDelete => messages.no_objs_to_delete.clone(),
            ValidationError::NoJobsToDownload => messages.no_jobs_to_download.clone(),
            ValidationError::DecisionPairRequired => messages.no_decisions_to_compare.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Messages;

    #[test]
    fn test_status_display() {
        let err = ApiError::Status { status: 403, message: "Forbidden".to_string() };
        assert_eq!(err.to_string(), "Forbidden (403)");
        let err = ApiError::Status { status: 500, message: String::new() };
        assert_eq!(err.to_string(), "Server error (500)");
    }

    #[test]
    fn test_validation_messages() {
        let messages = Messages {
            no_objs_to_delete: "a".to_string(),
            no_jobs_to_download: "b".to_string(),
            no_decisions_to_compare: "c".to_string(),
        };
        assert_eq!(ValidationError::NoObjectsToDelete.message(&messages), "a");
        assert_eq!(ValidationError::NoJobsToDownload.message(&messages), "b");
        assert_eq!(ValidationError::DecisionPairRequired.message(&messages), "c");
    }
}
