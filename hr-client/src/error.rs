//! Client error types

use shared::response::{ErrorBody, ListShapeError};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer from the server
    #[error("Request failed with status {status}: {}", api_text(.detail, .body))]
    Api {
        status: u16,
        /// Structured message from the error body, if any
        detail: Option<String>,
        /// Raw response text
        body: String,
    },

    /// 2xx with a body that is not JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// List body in none of the accepted shapes
    #[error(transparent)]
    ListShape(#[from] ListShapeError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

fn api_text<'a>(detail: &'a Option<String>, body: &'a str) -> &'a str {
    match detail {
        Some(d) => d,
        None if body.is_empty() => "no response body",
        None => body,
    }
}

impl ClientError {
    /// Build an [`ClientError::Api`] from a status and the raw error body
    pub fn from_status(status: u16, body: String) -> Self {
        let detail = ErrorBody::parse(&body).and_then(|b| b.message());
        ClientError::Api {
            status,
            detail,
            body,
        }
    }

    /// HTTP status carried by the error, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    /// Structured message the server supplied, if any
    pub fn server_detail(&self) -> Option<&str> {
        match self {
            ClientError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message to show a user: the server's structured field, else this
    /// error's own text, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        if let Some(detail) = self.server_detail() {
            return detail.to_string();
        }
        let own = self.to_string();
        if own.trim().is_empty() {
            fallback.to_string()
        } else {
            own
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_extracts_detail() {
        let err = ClientError::from_status(409, r#"{"detail":"cannot delete last admin"}"#.into());
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.server_detail(), Some("cannot delete last admin"));
        assert_eq!(err.user_message("Failed to delete user"), "cannot delete last admin");
    }

    #[test]
    fn test_user_message_falls_back_to_display() {
        let err = ClientError::from_status(502, "Bad Gateway".into());
        assert_eq!(err.server_detail(), None);
        assert_eq!(
            err.user_message("Failed"),
            "Request failed with status 502: Bad Gateway"
        );
        assert!(!err.is_unauthorized());
        assert!(ClientError::from_status(401, String::new()).is_unauthorized());
    }
}
