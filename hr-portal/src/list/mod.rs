//! List filter/sort engine
//!
//! Pure derivation from `(entities, search, filter, sort key)` to the
//! sequence a list screen displays. Recomputed from scratch on every
//! call; lists are small enough that no index is kept.

mod employees;
mod users;

use std::cmp::Ordering;
use std::collections::BTreeMap;

pub use employees::{
    EmployeeFilter, EmployeeSortKey, StatusFilter, department_counts, employment_type_counts,
    status_counts,
};
pub use users::{UserFilter, UserSortKey, role_counts};

/// Sentinel filter value meaning "no constraint"
pub const ALL: &str = "all";

/// Entity that can be matched against a free-text search
pub trait Searchable {
    /// Fields the search term is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any field; `needle` must already
    /// be lowercase
    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains(needle))
    }
}

/// Structured filters of a list screen, AND-combined with the search
pub trait EntityFilter: Default + Clone {
    type Item: Searchable;

    fn matches(&self, item: &Self::Item) -> bool;

    /// Whether any filter narrows the list
    fn is_active(&self) -> bool;

    /// Suffix for the "Showing N of M" summary, e.g. ` with role "HR"`
    fn describe(&self) -> String;
}

/// Single-key comparator
pub trait SortKey: Copy + Sized {
    type Item;

    /// Parse a UI sort value; `None` for unknown keys
    fn parse(raw: &str) -> Option<Self>;

    fn compare(&self, a: &Self::Item, b: &Self::Item) -> Ordering;
}

/// Text comparison approximating a locale collation: case-folded order
/// first, raw order as a tie-break
///
/// Differs from a real collation in two places. Equal-when-folded strings
/// put uppercase first (`"A"` before `"a"`), and letters outside ASCII
/// sort by code point, so `"é"` lands after `"z"` rather than next to `"e"`.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Cards vs table presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Cards => ViewMode::Table,
            ViewMode::Table => ViewMode::Cards,
        }
    }
}

/// Query state of one list screen
#[derive(Debug, Clone)]
pub struct ListQuery<F, K> {
    pub search: String,
    pub filter: F,
    /// `None` keeps the store's order
    pub sort: Option<K>,
    pub view_mode: ViewMode,
}

impl<F: Default, K> ListQuery<F, K> {
    pub fn new(sort: K) -> Self {
        Self {
            search: String::new(),
            filter: F::default(),
            sort: Some(sort),
            view_mode: ViewMode::default(),
        }
    }
}

impl<F, K> ListQuery<F, K>
where
    F: EntityFilter,
    K: SortKey<Item = F::Item>,
{
    /// Apply the search term, filters and sort to `items`
    pub fn apply<'a>(&self, items: &'a [F::Item]) -> Vec<&'a F::Item> {
        let needle = self.search.trim().to_lowercase();
        let mut out: Vec<&F::Item> = items
            .iter()
            .filter(|item| item.matches_search(&needle) && self.filter.matches(item))
            .collect();
        if let Some(key) = self.sort {
            // stable: equal keys keep their relative order
            out.sort_by(|a, b| key.compare(a, b));
        }
        out
    }

    /// Select the sort key by its UI name. Unknown names leave the list
    /// unsorted and return `false`.
    pub fn sort_by_name(&mut self, raw: &str) -> bool {
        self.sort = K::parse(raw);
        self.sort.is_some()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.trim().is_empty() || self.filter.is_active()
    }

    /// Reset the search term and every filter to "all"
    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.filter = F::default();
    }

    /// `Showing 3 of 10 users with role "HR Manager" matching "ann"`
    pub fn summary(&self, shown: usize, total: usize, noun: &str) -> String {
        let mut text = format!("Showing {shown} of {total} {noun}{}", self.filter.describe());
        let search = self.search.trim();
        if !search.is_empty() {
            text.push_str(&format!(" matching \"{search}\""));
        }
        text
    }
}

/// Occurrences of each key value, for filter badges
pub fn count_by<T, K>(items: &[T], key: K) -> BTreeMap<String, usize>
where
    K: Fn(&T) -> &str,
{
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(key(item).to_string()).or_insert(0) += 1;
    }
    counts
}

/// Parse a select value where `all` (or empty) means no constraint
pub(crate) fn parse_choice(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(raw.to_string())
    }
}
