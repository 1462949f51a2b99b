use shared::models::PasswordChange;
use validator::{Validate, ValidationError};

use super::{collect, field_error, into_result, not_blank};
use super::user::MIN_PASSWORD_LEN;
use crate::error::PortalResult;

/// Profile page "change password" input
#[derive(Debug, Clone, Default, Validate)]
pub struct PasswordChangeForm {
    #[validate(custom(function = "not_blank", message = "Current password is required"))]
    pub current_password: String,
    #[validate(custom(function = "check_strength"))]
    pub new_password: String,
    #[validate(must_match(other = "new_password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

fn check_strength(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(field_error("length", "Password must be at least 8 characters"));
    }
    if !value.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(field_error("letter", "Password must contain at least one letter"));
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(field_error("digit", "Password must contain at least one number"));
    }
    Ok(())
}

impl PasswordChangeForm {
    pub fn submit(&self) -> PortalResult<PasswordChange> {
        if let Err(e) = self.validate() {
            into_result(collect(&e))?;
        }
        Ok(PasswordChange {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;

    fn form(new: &str, confirm: &str) -> PasswordChangeForm {
        PasswordChangeForm {
            current_password: "old-pass1".into(),
            new_password: new.into(),
            confirm_password: confirm.into(),
        }
    }

    fn message(f: PasswordChangeForm, field: &str) -> String {
        match f.submit() {
            Err(PortalError::Validation(errs)) => errs[field].clone(),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn test_strength_rules() {
        assert_eq!(message(form("abc1", "abc1"), "new_password"), "Password must be at least 8 characters");
        assert_eq!(message(form("12345678", "12345678"), "new_password"), "Password must contain at least one letter");
        assert_eq!(message(form("abcdefgh", "abcdefgh"), "new_password"), "Password must contain at least one number");
    }

    #[test]
    fn test_confirmation_must_match() {
        assert_eq!(message(form("abcdefg1", "abcdefg2"), "confirm_password"), "Passwords do not match");
    }

    #[test]
    fn test_valid_change() {
        let change = form("abcdefg1", "abcdefg1").submit().unwrap();
        assert_eq!(change.new_password, "abcdefg1");
    }
}
