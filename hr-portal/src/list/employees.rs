use std::cmp::Ordering;
use std::collections::BTreeMap;

use shared::models::{Department, Employee, EmploymentType};
use shared::util::timestamp_or_epoch;

use super::{EntityFilter, Searchable, SortKey, compare_text, count_by, parse_choice};

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.employee_id,
            &self.department,
            &self.position,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            _ => Self::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    fn matches(&self, is_active: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => is_active,
            Self::Inactive => !is_active,
        }
    }
}

/// Department, employment-type and status filters of the employee list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub department: Option<String>,
    pub employment_type: Option<String>,
    pub status: StatusFilter,
}

impl EmployeeFilter {
    pub fn set_department(&mut self, raw: &str) {
        self.department = parse_choice(raw);
    }

    pub fn set_employment_type(&mut self, raw: &str) {
        self.employment_type = parse_choice(raw);
    }

    pub fn set_status(&mut self, raw: &str) {
        self.status = StatusFilter::parse(raw);
    }
}

impl EntityFilter for EmployeeFilter {
    type Item = Employee;

    fn matches(&self, e: &Employee) -> bool {
        self.department.as_ref().is_none_or(|d| e.department == *d)
            && self
                .employment_type
                .as_ref()
                .is_none_or(|t| e.employment_type == *t)
            && self.status.matches(e.is_active)
    }

    fn is_active(&self) -> bool {
        self.department.is_some()
            || self.employment_type.is_some()
            || self.status != StatusFilter::All
    }

    fn describe(&self) -> String {
        let mut out = String::new();
        if let Some(d) = &self.department {
            out.push_str(&format!(" in \"{}\"", Department::display_name_of(d)));
        }
        if let Some(t) = &self.employment_type {
            out.push_str(&format!(
                " with \"{}\" employment",
                EmploymentType::display_name_of(t)
            ));
        }
        if self.status != StatusFilter::All {
            out.push_str(&format!(" with \"{}\" status", self.status.as_str()));
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmployeeSortKey {
    #[default]
    FirstName,
    LastName,
    Email,
    Department,
    Position,
    /// Newest first; missing dates sort as oldest
    HireDate,
    /// Newest first
    Created,
}

impl SortKey for EmployeeSortKey {
    type Item = Employee;

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "email" => Some(Self::Email),
            "department" => Some(Self::Department),
            "position" => Some(Self::Position),
            "hire_date" => Some(Self::HireDate),
            "created" | "created_at" => Some(Self::Created),
            _ => None,
        }
    }

    fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            Self::FirstName => compare_text(&a.first_name, &b.first_name),
            Self::LastName => compare_text(&a.last_name, &b.last_name),
            Self::Email => compare_text(&a.email, &b.email),
            Self::Department => compare_text(&a.department, &b.department),
            Self::Position => compare_text(&a.position, &b.position),
            Self::HireDate => newest_first(a.hire_date.as_deref(), b.hire_date.as_deref()),
            Self::Created => newest_first(a.created_at.as_deref(), b.created_at.as_deref()),
        }
    }
}

fn newest_first(a: Option<&str>, b: Option<&str>) -> Ordering {
    timestamp_or_epoch(b).cmp(&timestamp_or_epoch(a))
}

pub fn department_counts(employees: &[Employee]) -> BTreeMap<String, usize> {
    count_by(employees, |e| e.department.as_str())
}

pub fn employment_type_counts(employees: &[Employee]) -> BTreeMap<String, usize> {
    count_by(employees, |e| e.employment_type.as_str())
}

/// `(active, inactive)`
pub fn status_counts(employees: &[Employee]) -> (usize, usize) {
    let active = employees.iter().filter(|e| e.is_active).count();
    (active, employees.len() - active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ListQuery;

    fn employee(first: &str, dept: &str, position: &str, hired: Option<&str>) -> Employee {
        Employee {
            id: 0,
            employee_id: format!("E-{first}"),
            first_name: first.into(),
            last_name: "Doe".into(),
            email: format!("{}@corp.test", first.to_lowercase()),
            department: dept.into(),
            position: position.into(),
            employment_type: "full_time".into(),
            hire_date: hired.map(str::to_string),
            salary: None,
            is_active: true,
            created_at: None,
        }
    }

    fn firsts(list: &[&Employee]) -> Vec<String> {
        list.iter().map(|e| e.first_name.clone()).collect()
    }

    type Query = ListQuery<EmployeeFilter, EmployeeSortKey>;

    #[test]
    fn test_search_matches_position() {
        let staff = vec![
            employee("Ann", "hr", "Recruiter", None),
            employee("Ben", "it", "Software Engineer", None),
            employee("Cal", "sales", "Account Lead", None),
        ];
        let mut query = Query::new(EmployeeSortKey::FirstName);
        query.search = "eng".into();
        let result = query.apply(&staff);
        assert_eq!(firsts(&result), vec!["Ben"]);
        // idempotent
        let again: Vec<Employee> = result.into_iter().cloned().collect();
        assert_eq!(firsts(&query.apply(&again)), vec!["Ben"]);
    }

    #[test]
    fn test_filters_and_combine() {
        let mut staff = vec![
            employee("Ann", "hr", "Recruiter", None),
            employee("Ben", "hr", "Generalist", None),
            employee("Cal", "it", "Admin", None),
        ];
        staff[1].is_active = false;
        staff[1].employment_type = "contract".into();

        let mut query = Query::new(EmployeeSortKey::FirstName);
        query.filter.set_department("hr");
        assert_eq!(firsts(&query.apply(&staff)), vec!["Ann", "Ben"]);
        query.filter.set_status("inactive");
        assert_eq!(firsts(&query.apply(&staff)), vec!["Ben"]);
        query.filter.set_employment_type("contract");
        assert_eq!(
            query.summary(1, 3, "employees"),
            "Showing 1 of 3 employees in \"Human Resources\" with \"Contract\" employment with \"inactive\" status"
        );

        query.clear_filters();
        assert_eq!(query.filter, EmployeeFilter::default());
        assert_eq!(query.apply(&staff).len(), 3);
    }

    #[test]
    fn test_hire_date_missing_sorts_oldest() {
        let staff = vec![
            employee("NoDate", "it", "Dev", None),
            employee("Old", "it", "Dev", Some("2019-03-01")),
            employee("New", "it", "Dev", Some("2023-08-15")),
        ];
        let query = Query::new(EmployeeSortKey::HireDate);
        assert_eq!(firsts(&query.apply(&staff)), vec!["New", "Old", "NoDate"]);
    }

    #[test]
    fn test_sort_is_stable_and_ordered() {
        let staff = vec![
            employee("b", "it", "Dev", None),
            employee("A", "it", "Dev", None),
            employee("a", "it", "Dev", None),
            employee("C", "it", "Dev", None),
        ];
        let query = Query::new(EmployeeSortKey::Department);
        // equal department keys keep input order
        assert_eq!(firsts(&query.apply(&staff)), vec!["b", "A", "a", "C"]);

        let query = Query::new(EmployeeSortKey::FirstName);
        let sorted = query.apply(&staff);
        for pair in sorted.windows(2) {
            assert_ne!(
                EmployeeSortKey::FirstName.compare(pair[0], pair[1]),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn test_counts() {
        let mut staff = vec![
            employee("Ann", "hr", "Recruiter", None),
            employee("Ben", "it", "Dev", None),
        ];
        staff[0].is_active = false;
        assert_eq!(department_counts(&staff).get("hr"), Some(&1));
        assert_eq!(employment_type_counts(&staff).get("full_time"), Some(&2));
        assert_eq!(status_counts(&staff), (1, 1));
    }
}
