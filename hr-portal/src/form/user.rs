use shared::models::{UserCreate, UserUpdate};
use shared::permissions;
use validator::Validate;

use super::{FormMode, check_email, collect, into_result, not_blank};
use crate::config::PortalConfig;
use crate::error::PortalResult;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Create/edit user dialog input
#[derive(Debug, Clone, Validate)]
pub struct UserForm {
    #[validate(custom(function = "not_blank", message = "Username is required"))]
    pub username: String,
    #[validate(custom(function = "check_email"))]
    pub email: String,
    /// Empty means "unchanged" on edit
    pub password: String,
    #[validate(custom(function = "not_blank", message = "Role is required"))]
    pub role: String,
    pub is_active: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            role: "user".to_string(),
            is_active: true,
        }
    }
}

/// Validated request body
#[derive(Debug, Clone)]
pub enum UserPayload {
    Create(UserCreate),
    Update(UserUpdate),
}

impl UserForm {
    /// Pre-fill the edit dialog; the password is never echoed back
    pub fn from_user(user: &shared::models::User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role.clone(),
            is_active: user.is_active,
        }
    }

    /// Validate and build the request body
    ///
    /// `caller_role` limits which roles may be assigned. On create the
    /// configured placeholder password fills an empty password field.
    pub fn submit(
        &self,
        mode: FormMode,
        caller_role: &str,
        config: &PortalConfig,
    ) -> PortalResult<UserPayload> {
        let mut form = self.clone();
        if mode == FormMode::Create
            && form.password.is_empty()
            && let Some(placeholder) = config.placeholder_password()
        {
            form.password = placeholder.to_string();
        }

        let mut errors = match form.validate() {
            Ok(()) => Default::default(),
            Err(e) => collect(&e),
        };

        let password_error = match (mode, form.password.is_empty()) {
            (FormMode::Create, true) => Some("Password is required for new users"),
            (_, false) if form.password.chars().count() < MIN_PASSWORD_LEN => {
                Some("Password must be at least 8 characters")
            }
            _ => None,
        };
        if let Some(message) = password_error {
            errors.insert("password".into(), message.into());
        }

        if !errors.contains_key("role") && !permissions::can_edit_role(caller_role, &form.role) {
            errors.insert("role".into(), "You cannot assign this role".into());
        }

        into_result(errors)?;
        Ok(form.into_payload(mode))
    }

    fn into_payload(self, mode: FormMode) -> UserPayload {
        let username = self.username.trim().to_string();
        let email = self.email.trim().to_lowercase();
        let role = match self.role.trim() {
            "" => "user".to_string(),
            r => r.to_string(),
        };
        match mode {
            FormMode::Create => UserPayload::Create(UserCreate {
                username,
                email,
                password: self.password,
                role,
                is_active: self.is_active,
            }),
            FormMode::Edit => UserPayload::Update(UserUpdate {
                username,
                email,
                role,
                password: (!self.password.is_empty()).then_some(self.password),
            }),
        }
    }
}
