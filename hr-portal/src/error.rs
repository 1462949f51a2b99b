//! Portal error types

use std::collections::BTreeMap;

use hr_client::ClientError;
use thiserror::Error;

/// Field name -> first validation message for that field
pub type FieldErrors = BTreeMap<String, String>;

/// Portal error type
#[derive(Debug, Error)]
pub enum PortalError {
    /// Caller's role may not perform the operation; no request was sent
    #[error("{0}")]
    PermissionDenied(String),

    /// Client-side form validation failed; no request was sent
    #[error("Validation failed: {}", summarize(.0))]
    Validation(FieldErrors),

    /// Request failed (transport, server rejection or bad response)
    #[error("{message}")]
    Request {
        /// User-facing message already shown in the notification
        message: String,
        #[source]
        source: ClientError,
    },

    /// The modal was asked to do something its current state does not allow
    #[error("Invalid modal transition: {0}")]
    InvalidTransition(String),

    /// Confirmation dialog was dropped before an answer
    #[error("Confirmation cancelled")]
    Cancelled,
}

fn summarize(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, msg)| format!("{field}: {msg}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl PortalError {
    /// Wrap a client error, extracting the message users should see
    pub fn request(source: ClientError, fallback: &str) -> Self {
        PortalError::Request {
            message: source.user_message(fallback),
            source,
        }
    }

    /// HTTP status of the underlying request failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            PortalError::Request { source, .. } => source.status(),
            _ => None,
        }
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            PortalError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type for portal operations
pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_message_prefers_server_detail() {
        let source = ClientError::from_status(400, r#"{"detail":"cannot delete last admin"}"#.into());
        let err = PortalError::request(source, "Failed to delete user");
        assert_eq!(err.to_string(), "cannot delete last admin");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_validation_display() {
        let mut errors = FieldErrors::new();
        errors.insert("email".into(), "Email is required".into());
        errors.insert("username".into(), "Username is required".into());
        let err = PortalError::Validation(errors);
        assert_eq!(
            err.to_string(),
            "Validation failed: email: Email is required, username: Username is required"
        );
        assert_eq!(err.field_errors().map(|e| e.len()), Some(2));
    }
}
