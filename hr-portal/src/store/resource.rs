//! Per-entity policy and wording for [`EntityStore`](super::EntityStore)

use hr_client::{Employees, Resource, Users};
use shared::models::{EmployeeData, User, UserCreate, UserUpdate};
use shared::permissions;

/// Mutating operation, used to pick a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
    SetActive,
    AssignEmployee,
    UnassignEmployee,
}

/// A [`Resource`] the portal manages: who may touch it and what to tell
/// the user afterwards
pub trait ManagedResource: Resource {
    /// Title-case noun for messages, e.g. `User`
    const LABEL: &'static str;
    /// Plural noun for messages, e.g. `users`
    const PLURAL: &'static str;

    /// Whether `role` may load and mutate this collection
    fn can_manage(role: &str) -> bool;

    /// Role a create payload would grant, for hierarchy checks
    fn created_role(_data: &Self::Create) -> Option<&str> {
        None
    }

    /// Role an update payload would grant, for hierarchy checks
    fn updated_role(_data: &Self::Update) -> Option<&str> {
        None
    }

    /// Role currently held by an existing entity
    fn entity_role(_entity: &Self::Entity) -> Option<&str> {
        None
    }

    fn created_message(data: &Self::Create) -> String {
        let _ = data;
        format!("{} created successfully!", Self::LABEL)
    }

    fn success_message(op: Operation, active: bool) -> String {
        match op {
            Operation::Fetch => format!("{} loaded", Self::PLURAL),
            Operation::Create => format!("{} created successfully!", Self::LABEL),
            Operation::Update => format!("{} updated successfully!", Self::LABEL),
            Operation::Delete => format!("{} deleted successfully!", Self::LABEL),
            Operation::SetActive if active => format!("{} activated successfully!", Self::LABEL),
            Operation::SetActive => format!("{} deactivated successfully!", Self::LABEL),
            Operation::AssignEmployee => "Employee assigned successfully!".to_string(),
            Operation::UnassignEmployee => "Employee unassigned successfully!".to_string(),
        }
    }

    /// Default text when a failure carries no usable message
    fn failure_message(op: Operation) -> String {
        let noun = Self::NOUN;
        match op {
            Operation::Fetch => format!("Failed to load {}", Self::PLURAL),
            Operation::Create => format!("Failed to create {noun}"),
            Operation::Update => format!("Failed to update {noun}"),
            Operation::Delete => format!("Failed to delete {noun}"),
            Operation::SetActive => format!("Failed to toggle {noun} status"),
            Operation::AssignEmployee => "Failed to assign employee".to_string(),
            Operation::UnassignEmployee => "Failed to unassign employee".to_string(),
        }
    }

    fn permission_denied_message() -> String {
        format!("You need appropriate access to view {}", Self::PLURAL)
    }
}

impl ManagedResource for Users {
    const LABEL: &'static str = "User";
    const PLURAL: &'static str = "users";

    fn can_manage(role: &str) -> bool {
        permissions::can_manage_users(role)
    }

    fn created_role(data: &UserCreate) -> Option<&str> {
        Some(&data.role)
    }

    fn updated_role(data: &UserUpdate) -> Option<&str> {
        Some(&data.role)
    }

    fn entity_role(entity: &User) -> Option<&str> {
        Some(&entity.role)
    }

    fn created_message(data: &UserCreate) -> String {
        format!("User {} created successfully!", data.username)
    }
}

impl ManagedResource for Employees {
    const LABEL: &'static str = "Employee";
    const PLURAL: &'static str = "employees";

    fn can_manage(role: &str) -> bool {
        permissions::can_manage_employees(role)
    }

    fn created_message(data: &EmployeeData) -> String {
        format!(
            "Employee {} {} created successfully!",
            data.first_name, data.last_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Users::success_message(Operation::SetActive, false),
            "User deactivated successfully!"
        );
        assert_eq!(
            Employees::success_message(Operation::Delete, true),
            "Employee deleted successfully!"
        );
        assert_eq!(Employees::failure_message(Operation::Fetch), "Failed to load employees");
        assert_eq!(
            Users::failure_message(Operation::SetActive),
            "Failed to toggle user status"
        );
        assert_eq!(
            Users::permission_denied_message(),
            "You need appropriate access to view users"
        );
    }

    #[test]
    fn test_manage_gate() {
        assert!(Users::can_manage("hr"));
        assert!(!Users::can_manage("employee"));
        assert!(Employees::can_manage("superadmin"));
        assert!(!Employees::can_manage("manager"));
    }
}
