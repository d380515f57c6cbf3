//! The routing information shared with every consumer of a router.

use std::collections::BTreeMap;

use katas_history::History;

/// The current routing information.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterState {
    /// The current path, without the prefix.
    pub path: String,

    /// Parameters read from the path.
    ///
    /// There are no route patterns to read them from, so this is always empty.
    pub params: BTreeMap<String, String>,

    /// The prefix the site is mounted under, if any.
    pub prefix: Option<String>,

    /// Whether there is a prior path to go back to.
    ///
    /// This might be [`true`] even if there isn't.
    pub can_go_back: bool,

    /// Whether there is a later path to go forward to.
    ///
    /// This might be [`true`] even if there isn't.
    pub can_go_forward: bool,
}

impl RouterState {
    pub(crate) fn read(history: &dyn History) -> Self {
        Self {
            path: history.current_route(),
            params: BTreeMap::new(),
            prefix: history.current_prefix(),
            can_go_back: history.can_go_back(),
            can_go_forward: history.can_go_forward(),
        }
    }

    /// Checks if `to` is the current path.
    ///
    /// The comparison is exact: `/about` and `/about/` are different routes, and `/lessons` is not
    /// active while `/lessons/jsx` is shown.
    #[must_use]
    pub fn is_active(&self, to: &str) -> bool {
        self.path == to
    }

    /// The `href` for a link to `to`, including the prefix.
    #[must_use]
    pub fn href(&self, to: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{to}"),
            None => to.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use katas_history::MemoryHistory;

    #[test]
    fn active_is_exact() {
        let state = RouterState {
            path: "/about".to_string(),
            ..Default::default()
        };

        assert!(state.is_active("/about"));
        assert!(!state.is_active("/about/"));
        assert!(!state.is_active("/"));
        assert!(!state.is_active("/About"));
    }

    #[test]
    fn read_from_history() {
        let history = MemoryHistory::with_initial_path("/virtualization").with_prefix("/katas");
        history.push("/infinite-scroll".to_string());

        let state = RouterState::read(&history);
        assert_eq!(state.path, "/infinite-scroll");
        assert_eq!(state.prefix.as_deref(), Some("/katas"));
        assert!(state.can_go_back);
        assert!(!state.can_go_forward);
        assert!(state.params.is_empty());
        assert_eq!(state.href("/autocomplete"), "/katas/autocomplete");
    }
}
