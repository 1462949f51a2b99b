//! User endpoints beyond CRUD: employee links and self-service profile

use serde_json::Value;
use shared::models::{AssignEmployee, PasswordChange, ProfileUpdate, UnassignEmployee, User};

use super::{ResourceApi, Users, check_envelope, decode_entity};
use crate::{ClientError, ClientResult, HttpClient};

pub type UserApi<C> = ResourceApi<C, Users>;

impl<C: HttpClient> ResourceApi<C, Users> {
    /// Link `user_id` to the employee record `employee_id`
    pub async fn assign_employee(&self, user_id: &str, employee_id: i64) -> ClientResult<Value> {
        let body = AssignEmployee {
            user_id: user_id.to_string(),
            employee_id,
        };
        let resp: Value = self.http().post("api/users/assign-employee", &body).await?;
        check_envelope(resp)
    }

    /// Remove the employee link from `user_id`
    pub async fn unassign_employee(&self, user_id: &str) -> ClientResult<Value> {
        let body = UnassignEmployee {
            user_id: user_id.to_string(),
        };
        let resp: Value = self.http().post("api/users/unassign-employee", &body).await?;
        check_envelope(resp)
    }

    /// Profile of the logged-in account
    pub async fn profile(&self) -> ClientResult<User> {
        let resp: Value = self.http().get("api/users/me").await?;
        decode_entity(&check_envelope(resp)?)
            .ok_or_else(|| ClientError::InvalidResponse("Missing profile data".into()))
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<User> {
        let resp: Value = self.http().put("api/users/me", update).await?;
        decode_entity(&check_envelope(resp)?)
            .ok_or_else(|| ClientError::InvalidResponse("Missing profile data".into()))
    }

    pub async fn change_password(&self, change: &PasswordChange) -> ClientResult<Value> {
        let resp: Value = self
            .http()
            .post("api/users/me/change-password", change)
            .await?;
        check_envelope(resp)
    }
}
