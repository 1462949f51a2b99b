use std::cmp::Ordering;
use std::collections::BTreeMap;

use shared::models::User;
use shared::permissions;
use shared::util::timestamp_or_epoch;

use super::{EntityFilter, Searchable, SortKey, compare_text, count_by, parse_choice};

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.username, &self.email, &self.role]
    }
}

/// Role filter of the user list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Exact role value; `None` is "all"
    pub role: Option<String>,
}

impl UserFilter {
    pub fn set_role(&mut self, raw: &str) {
        self.role = parse_choice(raw);
    }
}

impl EntityFilter for UserFilter {
    type Item = User;

    fn matches(&self, user: &User) -> bool {
        self.role.as_ref().is_none_or(|r| user.role == *r)
    }

    fn is_active(&self) -> bool {
        self.role.is_some()
    }

    fn describe(&self) -> String {
        match &self.role {
            Some(role) => format!(" with role \"{}\"", permissions::role_display_name(role)),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserSortKey {
    #[default]
    Username,
    Email,
    Role,
    /// Newest first
    Created,
}

impl SortKey for UserSortKey {
    type Item = User;

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "username" => Some(Self::Username),
            "email" => Some(Self::Email),
            "role" => Some(Self::Role),
            "created" | "created_at" => Some(Self::Created),
            _ => None,
        }
    }

    fn compare(&self, a: &User, b: &User) -> Ordering {
        match self {
            Self::Username => compare_text(&a.username, &b.username),
            Self::Email => compare_text(&a.email, &b.email),
            Self::Role => compare_text(&a.role, &b.role),
            Self::Created => timestamp_or_epoch(b.created_at.as_deref())
                .cmp(&timestamp_or_epoch(a.created_at.as_deref())),
        }
    }
}

/// Users per role value
pub fn role_counts(users: &[User]) -> BTreeMap<String, usize> {
    count_by(users, |u| u.role.as_str())
}
