//! Role policy
//!
//! Single source of truth for the role hierarchy, role display metadata
//! and every screen-level permission predicate. All functions are pure and
//! total: role strings that are not in the table resolve to level 0 and a
//! neutral "Unknown" badge instead of failing.
//!
//! ## Levels
//!
//! | Level | Roles |
//! |-------|-------|
//! | 5 | superadmin |
//! | 4 | director |
//! | 3 | admin, system_admin |
//! | 2 | hr, supervisor, manager |
//! | 1 | user, employee, engineer, purchasing, store |
//! | 0 | anything else |

use crate::models::Role;
use crate::types::grants;

pub const USERS_VIEW: &str = "users:view";
pub const USERS_MANAGE: &str = "users:manage";
pub const EMPLOYEES_VIEW: &str = "employees:view";
pub const EMPLOYEES_MANAGE: &str = "employees:manage";
pub const PROFILE_EDIT: &str = "profile:edit";

/// Badge color for roles outside the table
pub const UNKNOWN_ROLE_COLOR: &str = "bg-gray-100 text-gray-800";

struct RoleEntry {
    role: Role,
    level: u8,
    label: &'static str,
    icon: &'static str,
    color: &'static str,
    permissions: &'static [&'static str],
}

const ALL_ACCESS: &[&str] = &["*"];
const ADMIN_PERMISSIONS: &[&str] = &[
    USERS_VIEW,
    USERS_MANAGE,
    EMPLOYEES_VIEW,
    EMPLOYEES_MANAGE,
    PROFILE_EDIT,
];
const HR_PERMISSIONS: &[&str] = &[
    USERS_VIEW,
    USERS_MANAGE,
    EMPLOYEES_VIEW,
    EMPLOYEES_MANAGE,
    PROFILE_EDIT,
];
const MANAGER_PERMISSIONS: &[&str] = &[USERS_VIEW, EMPLOYEES_VIEW, PROFILE_EDIT];
const SUPERVISOR_PERMISSIONS: &[&str] = &[EMPLOYEES_VIEW, PROFILE_EDIT];
const STAFF_PERMISSIONS: &[&str] = &[PROFILE_EDIT];

const ROLE_TABLE: &[RoleEntry] = &[
    RoleEntry {
        role: Role::Superadmin,
        level: 5,
        label: "Super Admin",
        icon: "👑",
        color: "bg-gradient-to-r from-red-500 to-pink-600 text-white",
        permissions: ALL_ACCESS,
    },
    RoleEntry {
        role: Role::Director,
        level: 4,
        label: "Director",
        icon: "🎯",
        color: "bg-gradient-to-r from-purple-500 to-indigo-600 text-white",
        permissions: ALL_ACCESS,
    },
    RoleEntry {
        role: Role::Admin,
        level: 3,
        label: "Administrator",
        icon: "⚡",
        color: "bg-gradient-to-r from-blue-500 to-cyan-600 text-white",
        permissions: ADMIN_PERMISSIONS,
    },
    RoleEntry {
        role: Role::SystemAdmin,
        level: 3,
        label: "System Admin",
        icon: "🛡️",
        color: "bg-gradient-to-r from-sky-500 to-blue-600 text-white",
        permissions: ADMIN_PERMISSIONS,
    },
    RoleEntry {
        role: Role::Manager,
        level: 2,
        label: "Manager",
        icon: "📊",
        color: "bg-gradient-to-r from-green-500 to-emerald-600 text-white",
        permissions: MANAGER_PERMISSIONS,
    },
    RoleEntry {
        role: Role::Hr,
        level: 2,
        label: "HR Manager",
        icon: "👥",
        color: "bg-gradient-to-r from-yellow-500 to-orange-600 text-white",
        permissions: HR_PERMISSIONS,
    },
    RoleEntry {
        role: Role::Supervisor,
        level: 2,
        label: "Supervisor",
        icon: "🔍",
        color: "bg-gradient-to-r from-indigo-500 to-purple-600 text-white",
        permissions: SUPERVISOR_PERMISSIONS,
    },
    RoleEntry {
        role: Role::Engineer,
        level: 1,
        label: "Engineer",
        icon: "🔧",
        color: "bg-gradient-to-r from-cyan-500 to-blue-600 text-white",
        permissions: STAFF_PERMISSIONS,
    },
    RoleEntry {
        role: Role::Purchasing,
        level: 1,
        label: "Purchasing",
        icon: "🛒",
        color: "bg-gradient-to-r from-teal-500 to-green-600 text-white",
        permissions: STAFF_PERMISSIONS,
    },
    RoleEntry {
        role: Role::Store,
        level: 1,
        label: "Store",
        icon: "📦",
        color: "bg-gradient-to-r from-orange-500 to-red-600 text-white",
        permissions: STAFF_PERMISSIONS,
    },
    RoleEntry {
        role: Role::Employee,
        level: 1,
        label: "Employee",
        icon: "👤",
        color: "bg-gradient-to-r from-gray-500 to-slate-600 text-white",
        permissions: STAFF_PERMISSIONS,
    },
    RoleEntry {
        role: Role::User,
        level: 1,
        label: "User",
        icon: "👤",
        color: "bg-gradient-to-r from-gray-500 to-slate-600 text-white",
        permissions: STAFF_PERMISSIONS,
    },
];

fn entry_for(role: &str) -> Option<&'static RoleEntry> {
    let normalized = normalize_role(role);
    ROLE_TABLE.iter().find(|s| s.role.as_str() == normalized)
}

/// Canonical form of a raw role string: trimmed, lowercased, with the
/// legacy `admin1`/`admin2` aliases folded into `admin`.
pub fn normalize_role(role: &str) -> String {
    let lowered = role.trim().to_lowercase();
    match lowered.as_str() {
        "admin1" | "admin2" => "admin".to_string(),
        _ => lowered,
    }
}

/// Parse a raw role string into a known [`Role`], if it is one
pub fn parse_role(role: &str) -> Option<Role> {
    entry_for(role).map(|s| s.role)
}

/// Hierarchy level of a role string; 0 for anything unknown
pub fn hierarchy_level(role: &str) -> u8 {
    entry_for(role).map(|s| s.level).unwrap_or(0)
}

// ── Display metadata ────────────────────────────────────────────────

/// Display descriptor for a role badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleBadge {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

impl RoleBadge {
    pub const UNKNOWN: RoleBadge = RoleBadge {
        label: "Unknown",
        icon: "👤",
        color: UNKNOWN_ROLE_COLOR,
    };
}

pub fn role_badge(role: &str) -> RoleBadge {
    entry_for(role)
        .map(|s| RoleBadge {
            label: s.label,
            icon: s.icon,
            color: s.color,
        })
        .unwrap_or(RoleBadge::UNKNOWN)
}

pub fn role_display_name(role: &str) -> &'static str {
    role_badge(role).label
}

pub fn role_icon(role: &str) -> &'static str {
    role_badge(role).icon
}

pub fn role_color(role: &str) -> &'static str {
    role_badge(role).color
}

// ── Permission predicates ───────────────────────────────────────────

/// Permission tokens held by a role (empty for unknown roles)
pub fn role_permissions(role: &str) -> &'static [&'static str] {
    entry_for(role).map(|s| s.permissions).unwrap_or(&[])
}

/// Whether `role` holds `permission`, honouring `*` and `prefix:*`
pub fn has_permission(role: &str, permission: &str) -> bool {
    role_permissions(role)
        .iter()
        .any(|granted| grants(granted, permission))
}

pub fn can_view_users(role: &str) -> bool {
    has_permission(role, USERS_VIEW)
}

pub fn can_manage_users(role: &str) -> bool {
    has_permission(role, USERS_MANAGE)
}

pub fn can_view_employees(role: &str) -> bool {
    has_permission(role, EMPLOYEES_VIEW)
}

pub fn can_manage_employees(role: &str) -> bool {
    has_permission(role, EMPLOYEES_MANAGE)
}

pub fn can_create_employee(role: &str) -> bool {
    can_manage_employees(role)
}

pub fn can_edit_employee(role: &str) -> bool {
    can_manage_employees(role)
}

pub fn can_delete_employee(role: &str) -> bool {
    can_manage_employees(role)
}

pub fn can_toggle_employee_status(role: &str) -> bool {
    can_manage_employees(role)
}

pub fn can_view_employee_details(role: &str) -> bool {
    can_manage_employees(role)
}

/// Whether `caller` may edit an account holding `target`, or assign
/// `target` to an account.
///
/// Only a superadmin may touch a superadmin; otherwise the caller's level
/// must be at least the target's.
pub fn can_edit_role(caller: &str, target: &str) -> bool {
    if parse_role(target) == Some(Role::Superadmin) {
        return parse_role(caller) == Some(Role::Superadmin);
    }
    hierarchy_level(caller) >= hierarchy_level(target)
}

/// Roles `caller` may pick in the user form, lowest level first
pub fn assignable_roles(caller: &str) -> Vec<Role> {
    Role::ALL
        .iter()
        .copied()
        .filter(|r| can_edit_role(caller, r.as_str()))
        .collect()
}

/// Dashboard route a role lands on after login
pub fn landing_path(role: &str) -> &'static str {
    match parse_role(role) {
        Some(Role::Director) => "/director/dashboard",
        Some(Role::Superadmin) => "/superadmin/dashboard",
        Some(Role::Admin) | Some(Role::SystemAdmin) => "/dashboard",
        Some(Role::Manager) => "/manager/dashboard",
        Some(Role::Hr) => "/hr/dashboard",
        Some(Role::Supervisor) => "/supervisor/dashboard",
        Some(Role::Engineer) => "/engineer/dashboard",
        Some(Role::Purchasing) => "/purchasing/dashboard",
        Some(Role::Store) => "/store/dashboard",
        Some(Role::Employee) | Some(Role::User) => "/employee/dashboard",
        None => "/dashboard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNKNOWN: &str = "accounting";

    fn all_role_strings() -> Vec<&'static str> {
        let mut roles: Vec<&'static str> = Role::ALL.iter().map(|r| r.as_str()).collect();
        roles.push(UNKNOWN);
        roles.push("");
        roles
    }

    #[test]
    fn test_levels() {
        assert_eq!(hierarchy_level("superadmin"), 5);
        assert_eq!(hierarchy_level("employee"), 1);
        assert_eq!(hierarchy_level(" HR "), 2);
        assert_eq!(hierarchy_level("admin2"), 3);
        assert_eq!(hierarchy_level(UNKNOWN), 0);
        assert!(Role::ALL.iter().all(|r| hierarchy_level(r.as_str()) >= 1));
    }

    #[test]
    fn test_only_superadmin_edits_superadmin() {
        for role in all_role_strings() {
            assert_eq!(can_edit_role(role, "superadmin"), role == "superadmin", "{role}");
        }
    }

    #[test]
    fn test_can_edit_role_follows_levels() {
        for caller in all_role_strings() {
            for target in all_role_strings() {
                let expected = if target == "superadmin" {
                    caller == "superadmin"
                } else {
                    hierarchy_level(caller) >= hierarchy_level(target)
                };
                assert_eq!(can_edit_role(caller, target), expected, "{caller} -> {target}");
            }
        }
    }

    #[test]
    fn test_unknown_role_never_outranks_known() {
        for role in Role::ALL {
            assert!(!can_edit_role(UNKNOWN, role.as_str()));
        }
    }

    #[test]
    fn test_manage_predicates() {
        for role in ["superadmin", "director", "admin", "system_admin", "hr"] {
            assert!(can_manage_users(role), "{role}");
            assert!(can_manage_employees(role), "{role}");
        }
        for role in ["manager", "supervisor", "employee", "user", UNKNOWN] {
            assert!(!can_manage_users(role), "{role}");
            assert!(!can_manage_employees(role), "{role}");
        }
        assert!(can_view_users("manager"));
        assert!(can_view_employees("supervisor"));
        assert!(!can_view_employees("store"));
    }

    #[test]
    fn test_badges() {
        assert_eq!(role_display_name("superadmin"), "Super Admin");
        assert_eq!(role_icon("hr"), "👥");
        assert_eq!(role_badge(UNKNOWN), RoleBadge::UNKNOWN);
        assert_eq!(role_color(""), UNKNOWN_ROLE_COLOR);
    }

    #[test]
    fn test_assignable_roles() {
        let hr = assignable_roles("hr");
        assert!(hr.contains(&Role::Manager));
        assert!(!hr.contains(&Role::Admin));
        assert_eq!(assignable_roles("superadmin").len(), Role::ALL.len());
        assert!(!assignable_roles("director").contains(&Role::Superadmin));
        assert!(assignable_roles(UNKNOWN).is_empty());
    }

    #[test]
    fn test_landing_path() {
        assert_eq!(landing_path("hr"), "/hr/dashboard");
        assert_eq!(landing_path("admin1"), "/dashboard");
        assert_eq!(landing_path(UNKNOWN), "/dashboard");
    }
}
