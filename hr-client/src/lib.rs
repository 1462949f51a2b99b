//! HR Client - HTTP client for the HR backend
//!
//! Provides typed access to the user and employee REST endpoints, the
//! login/logout session lifecycle and the password-reset flow.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use api::{
    CrudApi, EmployeeApi, Employees, Resource, ResourceApi, UserApi, Users, decode_entity,
};
pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::{AuthService, Session};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse};
