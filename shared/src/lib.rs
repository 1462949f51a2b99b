//! Shared types for the HR portal
//!
//! Wire models, the role policy and response envelopes used by
//! `hr-client`, `hr-portal` and `hr-gateway`.

pub mod client;
pub mod models;
pub mod permissions;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Department, Employee, EmploymentType, Role, User};
pub use permissions::{RoleBadge, hierarchy_level};
pub use response::{ErrorBody, ListEnvelope, ListShapeError};
