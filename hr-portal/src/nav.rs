//! Role-driven navigation

use shared::models::Role;
use shared::permissions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

/// Sidebar entries visible to `role`, in display order
pub fn nav_items(role: &str) -> Vec<NavItem> {
    let mut items = vec![NavItem {
        name: "Dashboard",
        href: permissions::landing_path(role),
    }];
    if permissions::can_manage_employees(role) {
        items.push(NavItem {
            name: "Employee Management",
            href: "/hr/employees",
        });
    }
    if permissions::can_manage_users(role) {
        items.push(NavItem {
            name: "User Management",
            href: "/users",
        });
    }
    // only a superadmin outranks-or-equals superadmin
    if permissions::can_edit_role(role, Role::Superadmin.as_str()) {
        items.push(NavItem {
            name: "System Settings",
            href: "/system",
        });
    }
    if permissions::has_permission(role, permissions::PROFILE_EDIT) {
        items.push(NavItem {
            name: "My Profile",
            href: "/profile",
        });
    }
    items
}

/// Whether `role` may open the page at `href`
pub fn can_visit(role: &str, href: &str) -> bool {
    nav_items(role).iter().any(|item| item.href == href)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(role: &str) -> Vec<&'static str> {
        nav_items(role).into_iter().map(|i| i.href).collect()
    }

    #[test]
    fn test_superadmin_sees_everything() {
        assert_eq!(
            hrefs("superadmin"),
            vec!["/superadmin/dashboard", "/hr/employees", "/users", "/system", "/profile"]
        );
    }

    #[test]
    fn test_staff_sees_dashboard_and_profile() {
        assert_eq!(hrefs("engineer"), vec!["/engineer/dashboard", "/profile"]);
        assert!(!can_visit("engineer", "/users"));
    }

    #[test]
    fn test_hr_manages_people() {
        assert!(can_visit("hr", "/users"));
        assert!(can_visit("hr", "/hr/employees"));
        assert!(!can_visit("hr", "/system"));
    }

    #[test]
    fn test_unknown_role_gets_only_dashboard() {
        assert_eq!(hrefs("intruder"), vec!["/dashboard"]);
    }
}
