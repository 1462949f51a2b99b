//! Employee-to-user assignment
//!
//! One employee per user is a presentation rule: the assignment dialog
//! only offers employees no loaded user references, and a second link to
//! the same employee is refused before any request.

use std::collections::HashMap;

use hr_client::{EmployeeApi, HttpClient, Users};
use serde_json::Value;
use shared::models::{Employee, User};

use super::{EntityStore, ManagedResource, Operation};
use crate::error::{FieldErrors, PortalError, PortalResult};
use crate::notify::Notification;

/// Employees split by whether a user links to them
#[derive(Debug, Default)]
pub struct Assignments<'a> {
    pub assigned: Vec<(&'a Employee, &'a User)>,
    pub unassigned: Vec<&'a Employee>,
}

/// Partition `employees` by the users' `employee_id` links. Input order is
/// kept within each side.
pub fn partition_employees<'a>(users: &'a [User], employees: &'a [Employee]) -> Assignments<'a> {
    let links: HashMap<i64, &User> = users
        .iter()
        .filter_map(|u| u.employee_id.map(|id| (id, u)))
        .collect();

    let mut out = Assignments::default();
    for employee in employees {
        match links.get(&employee.id) {
            Some(user) => out.assigned.push((employee, *user)),
            None => out.unassigned.push(employee),
        }
    }
    out
}

impl<C: HttpClient + Clone> EntityStore<C, Users> {
    /// Employees the backend reports as not linked to any user
    pub async fn unassigned_employees(&self) -> PortalResult<Vec<Employee>> {
        let api = EmployeeApi::new(self.api.http().clone());
        api.unassigned().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to fetch unassigned employees");
            PortalError::request(e, "Failed to load employees")
        })
    }

    /// Link `employee_id` to `user_id`, then refetch users
    pub async fn assign_employee(
        &mut self,
        user_id: &str,
        employee_id: i64,
    ) -> PortalResult<Value> {
        let op = Operation::AssignEmployee;
        self.check_existing(&user_id.to_string(), op)?;

        if let Some(holder) = self
            .items
            .iter()
            .find(|u| u.employee_id == Some(employee_id) && u.id != user_id)
        {
            let message = format!("Employee is already assigned to {}", holder.username);
            self.notifier.notify(Notification::error(message.clone()));
            let mut errors = FieldErrors::new();
            errors.insert("employee_id".into(), message);
            return Err(PortalError::Validation(errors));
        }

        let _guard = super::SubmitGuard::engage(&self.submitting);
        let result = self.api.assign_employee(user_id, employee_id).await;
        self.finish(op, result, Users::success_message(op, true)).await
    }

    /// Remove the user's employee link, then refetch users
    pub async fn unassign_employee(&mut self, user_id: &str) -> PortalResult<Value> {
        let op = Operation::UnassignEmployee;
        self.check_existing(&user_id.to_string(), op)?;
        let _guard = super::SubmitGuard::engage(&self.submitting);
        let result = self.api.unassign_employee(user_id).await;
        self.finish(op, result, Users::success_message(op, true)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, employee_id: Option<i64>) -> User {
        User {
            id: id.into(),
            username: id.into(),
            email: String::new(),
            role: "user".into(),
            is_active: true,
            employee_id,
            created_at: None,
        }
    }

    fn employee(id: i64) -> Employee {
        Employee {
            id,
            employee_id: format!("E{id}"),
            first_name: "F".into(),
            last_name: "L".into(),
            email: String::new(),
            department: "it".into(),
            position: "Dev".into(),
            employment_type: "full_time".into(),
            hire_date: None,
            salary: None,
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn test_partition() {
        let users = vec![user("u1", Some(2)), user("u2", None)];
        let employees = vec![employee(1), employee(2), employee(3)];
        let split = partition_employees(&users, &employees);
        assert_eq!(split.assigned.len(), 1);
        assert_eq!(split.assigned[0].0.id, 2);
        assert_eq!(split.assigned[0].1.id, "u1");
        let ids: Vec<i64> = split.unassigned.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
