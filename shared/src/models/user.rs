//! User Model

use serde::{Deserialize, Serialize};

/// User account as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Raw role string; see [`crate::permissions`] for how it is ranked
    pub role: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Linked employee record (weak reference by id)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Create user payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub is_active: bool,
}

/// Update user payload (full form snapshot)
///
/// `password` is omitted from the body when the form left it blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Status toggle payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub is_active: bool,
}

/// Link a user account to an employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignEmployee {
    pub user_id: String,
    pub employee_id: i64,
}

/// Remove the employee link from a user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnassignEmployee {
    pub user_id: String,
}

/// Self-service profile update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Password change payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_tolerates_missing_optional_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u-1",
            "username": "alice",
            "role": "hr"
        }))
        .unwrap();
        assert!(user.is_active);
        assert_eq!(user.email, "");
        assert_eq!(user.employee_id, None);
        assert_eq!(user.created_at, None);
    }

    #[test]
    fn test_update_omits_blank_password() {
        let update = UserUpdate {
            username: "alice".into(),
            email: "a@x.com".into(),
            role: "hr".into(),
            password: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("password").is_none());
    }
}
