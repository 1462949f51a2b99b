use shared::models::{Employee, EmployeeData};
use validator::{Validate, ValidationError};

use super::{check_email, collect, field_error, into_result, not_blank};
use crate::error::PortalResult;

/// Create/edit employee dialog input
///
/// Date and salary stay as typed until [`EmployeeForm::submit`].
#[derive(Debug, Clone, Validate)]
pub struct EmployeeForm {
    #[validate(custom(function = "not_blank", message = "Employee ID is required"))]
    pub employee_id: String,
    #[validate(custom(function = "not_blank", message = "First name is required"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank", message = "Last name is required"))]
    pub last_name: String,
    #[validate(custom(function = "check_email"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "Department is required"))]
    pub department: String,
    #[validate(custom(function = "not_blank", message = "Position is required"))]
    pub position: String,
    #[validate(custom(function = "not_blank", message = "Employment type is required"))]
    pub employment_type: String,
    pub hire_date: String,
    #[validate(custom(function = "check_salary"))]
    pub salary: String,
    pub is_active: bool,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            department: String::new(),
            position: String::new(),
            employment_type: "full_time".to_string(),
            hire_date: String::new(),
            salary: String::new(),
            is_active: true,
        }
    }
}

fn parse_salary(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

fn check_salary(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || parse_salary(value).is_some() {
        return Ok(());
    }
    Err(field_error("salary", "Please enter a valid salary amount"))
}

impl EmployeeForm {
    pub fn from_employee(e: &Employee) -> Self {
        Self {
            employee_id: e.employee_id.clone(),
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            email: e.email.clone(),
            department: e.department.clone(),
            position: e.position.clone(),
            employment_type: e.employment_type.clone(),
            hire_date: e.hire_date.clone().unwrap_or_default(),
            salary: e.salary.map(|s| s.to_string()).unwrap_or_default(),
            is_active: e.is_active,
        }
    }

    /// Validate and build the body sent for both create and update
    pub fn submit(&self) -> PortalResult<EmployeeData> {
        if let Err(e) = self.validate() {
            into_result(collect(&e))?;
        }
        let hire_date = self.hire_date.trim();
        Ok(EmployeeData {
            employee_id: self.employee_id.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            department: self.department.trim().to_string(),
            position: self.position.trim().to_string(),
            employment_type: self.employment_type.trim().to_string(),
            hire_date: (!hire_date.is_empty()).then(|| hire_date.to_string()),
            salary: parse_salary(&self.salary),
            is_active: self.is_active,
        })
    }
}
