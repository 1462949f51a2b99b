//! Data models
//!
//! Shared between hr-client, hr-portal and the backend wire format.
//! User ids are UUID strings, employee ids are integers.

pub mod employee;
pub mod role;
pub mod user;

// Re-exports
pub use employee::*;
pub use role::*;
pub use user::*;
