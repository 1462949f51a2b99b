//! Session lifecycle
//!
//! A [`Session`] is created by [`AuthService::login`] (or restored from a
//! stored token) and handed explicitly to whatever needs the caller's
//! identity. [`AuthService::logout`] consumes it.

use serde_json::Value;
use shared::client::{
    ForgotPasswordRequest, HealthCheck, LoginRequest, LoginResponse, ResetPasswordRequest,
    ResetTokenStatus,
};
use shared::models::User;
use shared::permissions;
use urlencoding::encode;

use crate::api::{EmployeeApi, UserApi, check_envelope, decode_entity};
use crate::{ClientError, ClientResult, HttpClient};

/// Logged-in identity: bearer token plus the account it belongs to
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    user: User,
    expires_in: Option<u64>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
            expires_in: None,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> &str {
        &self.user.role
    }

    /// Token lifetime in seconds, as reported at login
    pub fn expires_in(&self) -> Option<u64> {
        self.expires_in
    }

    /// Dashboard route for this session's role
    pub fn landing_path(&self) -> &'static str {
        permissions::landing_path(&self.user.role)
    }
}

/// Login, logout and password-reset flows
#[derive(Debug, Clone)]
pub struct AuthService<C> {
    http: C,
}

impl<C: HttpClient + Clone> AuthService<C> {
    /// `http` should carry no token; authorized clients are derived per session
    pub fn new(mut http: C) -> Self {
        http.set_token(None);
        Self { http }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<Session> {
        let body: Value = self.http.post("api/login", credentials).await?;
        let resp: LoginResponse = decode_entity(&check_envelope(body)?)
            .ok_or_else(|| ClientError::InvalidResponse("Missing login data".into()))?;

        tracing::info!(username = %resp.user.username, role = %resp.user.role, "Login successful");
        Ok(Session {
            token: resp.access_token,
            user: resp.user,
            expires_in: resp.expires_in,
        })
    }

    /// Re-create a session from a stored token by asking the server who it
    /// belongs to
    pub async fn restore(&self, token: impl Into<String>) -> ClientResult<Session> {
        let token = token.into();
        let mut http = self.http.clone();
        http.set_token(Some(token.clone()));
        let body: Value = http.get("api/me").await?;
        let user: User = decode_entity(&check_envelope(body)?)
            .ok_or_else(|| ClientError::InvalidResponse("Missing user data".into()))?;
        Ok(Session::new(token, user))
    }

    /// Tear the session down. Tokens are stateless on the server, so
    /// dropping it is all that is needed.
    pub fn logout(&self, session: Session) {
        tracing::info!(username = %session.user.username, "Logged out");
        drop(session);
    }

    /// Transport carrying `session`'s bearer token
    pub fn authorized(&self, session: &Session) -> C {
        let mut http = self.http.clone();
        http.set_token(Some(session.token.clone()));
        http
    }

    pub fn users(&self, session: &Session) -> UserApi<C> {
        UserApi::new(self.authorized(session))
    }

    pub fn employees(&self, session: &Session) -> EmployeeApi<C> {
        EmployeeApi::new(self.authorized(session))
    }

    pub async fn forgot_password(&self, email: &str) -> ClientResult<Value> {
        let req = ForgotPasswordRequest {
            email: email.to_string(),
        };
        let body: Value = self.http.post("auth/forgot-password", &req).await?;
        check_envelope(body)
    }

    pub async fn verify_reset_token(&self, token: &str) -> ClientResult<ResetTokenStatus> {
        let path = format!("auth/verify-reset-token?token={}", encode(token));
        let body: Value = self.http.get(&path).await?;
        decode_entity(&check_envelope(body)?)
            .ok_or_else(|| ClientError::InvalidResponse("Missing token status".into()))
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> ClientResult<Value> {
        let req = ResetPasswordRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };
        let body: Value = self.http.post("auth/reset-password", &req).await?;
        check_envelope(body)
    }

    pub async fn health(&self) -> ClientResult<HealthCheck> {
        self.http.get("health").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> User {
        User {
            id: "u-1".into(),
            username: "alice".into(),
            email: "a@x.com".into(),
            role: role.into(),
            is_active: true,
            employee_id: None,
            created_at: None,
        }
    }

    #[test]
    fn test_session_accessors() {
        let session = Session::new("tok", user("hr"));
        assert_eq!(session.token(), "tok");
        assert_eq!(session.role(), "hr");
        assert_eq!(session.landing_path(), "/hr/dashboard");
        assert_eq!(session.expires_in(), None);
    }

    #[test]
    fn test_reset_token_is_query_encoded() {
        assert_eq!(encode("abc-123"), "abc-123");
        assert_eq!(encode("a+b/c="), "a%2Bb%2Fc%3D");
    }
}
