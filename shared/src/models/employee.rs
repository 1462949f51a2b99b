//! Employee Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Employee record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    /// External employee code (e.g. "EMP001")
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

fn default_true() -> bool {
    true
}

/// Employee form payload, used for both create and update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeData {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub employment_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    pub is_active: bool,
}

// =============================================================================
// Enumerations
// =============================================================================

/// Color tag used for values outside the known sets
pub const NEUTRAL_COLOR: &str = "bg-gray-100 text-gray-800 border-gray-200";

/// Display name for a raw enumeration value outside the known set:
/// capitalised, or "Unknown" when empty.
fn fallback_display_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Unknown".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Hr,
    It,
    Finance,
    Marketing,
    Sales,
    Operations,
    Engineering,
    Design,
    CustomerService,
    Legal,
}

impl Department {
    pub const ALL: [Department; 10] = [
        Department::Hr,
        Department::It,
        Department::Finance,
        Department::Marketing,
        Department::Sales,
        Department::Operations,
        Department::Engineering,
        Department::Design,
        Department::CustomerService,
        Department::Legal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Hr => "hr",
            Department::It => "it",
            Department::Finance => "finance",
            Department::Marketing => "marketing",
            Department::Sales => "sales",
            Department::Operations => "operations",
            Department::Engineering => "engineering",
            Department::Design => "design",
            Department::CustomerService => "customer_service",
            Department::Legal => "legal",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.as_str() == raw)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Department::Hr => "Human Resources",
            Department::It => "Information Technology",
            Department::Finance => "Finance",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Operations => "Operations",
            Department::Engineering => "Engineering",
            Department::Design => "Design",
            Department::CustomerService => "Customer Service",
            Department::Legal => "Legal",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Department::Hr => "bg-green-100 text-green-800 border-green-200",
            Department::It => "bg-blue-100 text-blue-800 border-blue-200",
            Department::Finance => "bg-yellow-100 text-yellow-800 border-yellow-200",
            Department::Marketing => "bg-pink-100 text-pink-800 border-pink-200",
            Department::Sales => "bg-purple-100 text-purple-800 border-purple-200",
            Department::Operations => "bg-orange-100 text-orange-800 border-orange-200",
            Department::Engineering => NEUTRAL_COLOR,
            Department::Design => "bg-indigo-100 text-indigo-800 border-indigo-200",
            Department::CustomerService => "bg-teal-100 text-teal-800 border-teal-200",
            Department::Legal => "bg-red-100 text-red-800 border-red-200",
        }
    }

    /// Display name for any raw department string
    pub fn display_name_of(raw: &str) -> String {
        match Self::parse(raw) {
            Some(d) => d.display_name().to_string(),
            None => fallback_display_name(raw),
        }
    }

    /// Color tag for any raw department string
    pub fn color_of(raw: &str) -> &'static str {
        Self::parse(raw).map(|d| d.color()).unwrap_or(NEUTRAL_COLOR)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Intern,
    Consultant,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 5] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Contract,
        EmploymentType::Intern,
        EmploymentType::Consultant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full_time",
            EmploymentType::PartTime => "part_time",
            EmploymentType::Contract => "contract",
            EmploymentType::Intern => "intern",
            EmploymentType::Consultant => "consultant",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == raw)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full Time",
            EmploymentType::PartTime => "Part Time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Intern => "Intern",
            EmploymentType::Consultant => "Consultant",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "bg-green-100 text-green-800 border-green-200",
            EmploymentType::PartTime => "bg-blue-100 text-blue-800 border-blue-200",
            EmploymentType::Contract => "bg-yellow-100 text-yellow-800 border-yellow-200",
            EmploymentType::Intern => "bg-purple-100 text-purple-800 border-purple-200",
            EmploymentType::Consultant => "bg-orange-100 text-orange-800 border-orange-200",
        }
    }

    pub fn display_name_of(raw: &str) -> String {
        match Self::parse(raw) {
            Some(t) => t.display_name().to_string(),
            None => fallback_display_name(raw),
        }
    }

    pub fn color_of(raw: &str) -> &'static str {
        Self::parse(raw).map(|t| t.color()).unwrap_or(NEUTRAL_COLOR)
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_lookup() {
        assert_eq!(Department::display_name_of("customer_service"), "Customer Service");
        assert_eq!(Department::display_name_of("research"), "Research");
        assert_eq!(Department::display_name_of(""), "Unknown");
        assert_eq!(Department::color_of("research"), NEUTRAL_COLOR);
    }

    #[test]
    fn test_employment_type_lookup() {
        assert_eq!(EmploymentType::display_name_of("part_time"), "Part Time");
        assert_eq!(
            EmploymentType::color_of("intern"),
            "bg-purple-100 text-purple-800 border-purple-200"
        );
    }

    #[test]
    fn test_employee_full_name() {
        let employee: Employee = serde_json::from_value(serde_json::json!({
            "id": 7,
            "first_name": "Somchai",
            "last_name": "Jaidee"
        }))
        .unwrap();
        assert_eq!(employee.full_name(), "Somchai Jaidee");
        assert!(employee.is_active);
        assert_eq!(employee.hire_date, None);
    }
}
