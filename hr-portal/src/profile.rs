//! Own-account profile page

use std::sync::Arc;

use hr_client::{HttpClient, UserApi};
use shared::models::{ProfileUpdate, User};
use validator::Validate;

use crate::error::{PortalError, PortalResult};
use crate::form::{PasswordChangeForm, check_email, collect, into_result, not_blank};
use crate::notify::{Notification, Notifier};

#[derive(Debug, Clone, Default, Validate)]
pub struct ProfileForm {
    #[validate(custom(function = "not_blank", message = "Username is required"))]
    pub username: String,
    #[validate(custom(function = "check_email"))]
    pub email: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }

    fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            username: Some(self.username.trim().to_string()),
            email: Some(self.email.trim().to_lowercase()),
        }
    }
}

/// Profile load/save and password change, one notification per call
pub struct ProfileService<C> {
    api: UserApi<C>,
    notifier: Arc<dyn Notifier>,
}

impl<C: HttpClient> ProfileService<C> {
    pub fn new(api: UserApi<C>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }

    pub async fn load(&self) -> PortalResult<User> {
        self.api.profile().await.map_err(|e| {
            let err = PortalError::request(e, "Failed to load profile data");
            self.notifier.notify(Notification::error(err.to_string()));
            err
        })
    }

    pub async fn save(&self, form: &ProfileForm) -> PortalResult<User> {
        if let Err(e) = form.validate() {
            into_result(collect(&e))?;
        }
        match self.api.update_profile(&form.to_update()).await {
            Ok(user) => {
                self.notifier
                    .notify(Notification::success("Profile updated successfully!"));
                Ok(user)
            }
            Err(e) => Err(self.fail(e, "Failed to update profile")),
        }
    }

    pub async fn change_password(&self, form: &PasswordChangeForm) -> PortalResult<()> {
        let change = form.submit()?;
        match self.api.change_password(&change).await {
            Ok(_) => {
                self.notifier
                    .notify(Notification::success("Password changed successfully!"));
                Ok(())
            }
            Err(e) => Err(self.fail(e, "Failed to change password")),
        }
    }

    fn fail(&self, e: hr_client::ClientError, fallback: &str) -> PortalError {
        let err = PortalError::request(e, fallback);
        tracing::error!(error = %err, "Profile request failed");
        self.notifier.notify(Notification::error(err.to_string()));
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_form_validation() {
        let form = ProfileForm {
            username: " ".into(),
            email: "bad".into(),
        };
        let errs = collect(&form.validate().unwrap_err());
        assert_eq!(errs["username"], "Username is required");
        assert_eq!(errs["email"], "Please enter a valid email address");
    }

    #[test]
    fn test_profile_update_is_normalized() {
        let form = ProfileForm {
            username: " bob ".into(),
            email: "Bob@X.com".into(),
        };
        let update = form.to_update();
        assert_eq!(update.username.as_deref(), Some("bob"));
        assert_eq!(update.email.as_deref(), Some("bob@x.com"));
    }
}
