//! Normalized errors for calls to the bug service.
//!
//! Every failure of a remote call ends up as one of three shapes: the server
//! answered with an error status, the server never answered, or the request
//! could not be built in the first place. Callers only ever need
//! [`ApiError::user_message`] to show something sensible.

use thiserror::Error;

/// Fallback shown when a server error carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to load data. Please try again.";

/// Shown for timeouts and connectivity failures.
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Network error: the server did not respond. Check your connection and try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server responded with a non-success status.
    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Server { status: u16, message: Option<String> },

    /// The request was sent but no response arrived (timeout, refused, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The request could not be constructed or its response not decoded.
    #[error("request error: {0}")]
    LocalFault(String),
}

impl ApiError {
    pub fn server(status: u16, message: Option<String>) -> Self {
        ApiError::Server { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// One human-readable line, preferring the server's own message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Server { status, .. } => {
                format!("{GENERIC_FAILURE_MESSAGE} (HTTP {status})")
            }
            ApiError::Network(_) => NETWORK_FAILURE_MESSAGE.to_string(),
            ApiError::LocalFault(detail) => format!("Request could not be sent: {detail}"),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return ApiError::LocalFault(err.to_string());
        }
        if err.is_decode() {
            return ApiError::LocalFault(format!("invalid response body: {err}"));
        }
        if let Some(status) = err.status() {
            return ApiError::server(status.as_u16(), None);
        }
        ApiError::Network(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::LocalFault(format!("invalid URL: {err}"))
    }
}

/// Pull a message out of an error response body.
///
/// Understands `{"detail": "..."}`, `{"detail": [{"msg": "..."}]}` (request
/// validation failures) and `{"message": "..."}`. Non-JSON bodies yield
/// `None` so HTML error pages are never surfaced.
pub fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    match value.get("detail") {
        Some(serde_json::Value::String(detail)) => return Some(detail.clone()),
        Some(serde_json::Value::Array(items)) => {
            if let Some(msg) = items
                .iter()
                .find_map(|item| item.get("msg").and_then(|m| m.as_str()))
            {
                return Some(msg.to_string());
            }
        }
        _ => {}
    }

    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}
