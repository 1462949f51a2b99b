//! Common types for the shared crate

/// Wildcard-aware match of a granted permission token against a required
/// action, e.g. `users:manage`
///
/// `*` grants everything and `users:*` grants every `users:` action.
pub(crate) fn grants(granted: &str, action: &str) -> bool {
    if granted == "*" {
        return true;
    }
    if let Some(prefix) = granted.strip_suffix(":*") {
        return action
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with(':'));
    }
    granted == action
}
