//! Client-side form validation
//!
//! Forms validate with `validator` derives and report one message per
//! field. A form that fails validation never reaches the network.

mod employee;
mod password;
mod user;

use std::borrow::Cow;

use validator::{ValidateEmail, ValidationError, ValidationErrors};

use crate::error::{FieldErrors, PortalError};

pub use employee::EmployeeForm;
pub use password::PasswordChangeForm;
pub use user::{UserForm, UserPayload};

/// Which dialog a form belongs to; passwords are only mandatory on create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

pub(crate) fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Non-empty after trimming; the message comes from the attribute
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

pub(crate) fn check_email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(field_error("required", "Email is required"));
    }
    if !value.validate_email() {
        return Err(field_error("email", "Please enter a valid email address"));
    }
    Ok(())
}

/// Flatten `validator` output into field -> first message
pub(crate) fn collect(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                (field.to_string(), message)
            })
        })
        .collect()
}

pub(crate) fn into_result(errors: FieldErrors) -> Result<(), PortalError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(PortalError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_email() {
        assert!(check_email(" a@x.com ").is_ok());
        assert_eq!(
            check_email("").unwrap_err().message.as_deref(),
            Some("Email is required")
        );
        assert_eq!(
            check_email("not-an-email").unwrap_err().message.as_deref(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("x").is_ok());
        assert!(not_blank("   ").is_err());
    }
}
