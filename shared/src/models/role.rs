//! Role Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Known account roles.
///
/// Roles travel as lowercase strings on the wire. A role string the
/// backend sends that is not listed here is kept as a raw `String` on the
/// entity and resolves to hierarchy level 0 in the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Employee,
    Engineer,
    Purchasing,
    Store,
    Hr,
    Supervisor,
    Manager,
    Admin,
    SystemAdmin,
    Director,
    Superadmin,
}

impl Role {
    /// Every known role, lowest level first.
    pub const ALL: [Role; 12] = [
        Role::User,
        Role::Employee,
        Role::Engineer,
        Role::Purchasing,
        Role::Store,
        Role::Hr,
        Role::Supervisor,
        Role::Manager,
        Role::Admin,
        Role::SystemAdmin,
        Role::Director,
        Role::Superadmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Employee => "employee",
            Role::Engineer => "engineer",
            Role::Purchasing => "purchasing",
            Role::Store => "store",
            Role::Hr => "hr",
            Role::Supervisor => "supervisor",
            Role::Manager => "manager",
            Role::Admin => "admin",
            Role::SystemAdmin => "system_admin",
            Role::Director => "director",
            Role::Superadmin => "superadmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known role
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
