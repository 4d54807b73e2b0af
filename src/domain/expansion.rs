//! Sidebar expansion state, owned by the caller and passed down explicitly.

use std::collections::BTreeSet;

use tracing::trace;

use crate::domain::active::active_path;
use crate::domain::menu::MenuTree;

/// Set of expanded group titles.
///
/// Keyed purely by title: two groups sharing a title expand together.
/// Only changed by explicit calls, never by navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `title`; returns the new state.
    pub fn toggle(&mut self, title: &str) -> bool {
        let expanded = if self.expanded.remove(title) {
            false
        } else {
            self.expanded.insert(title.to_string());
            true
        };
        trace!(title, expanded, "toggle");
        expanded
    }

    pub fn is_expanded(&self, title: &str) -> bool {
        self.expanded.contains(title)
    }

    pub fn expand(&mut self, title: &str) {
        self.expanded.insert(title.to_string());
    }

    pub fn collapse(&mut self, title: &str) {
        self.expanded.remove(title);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    pub fn expanded_titles(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }

    /// Expand every group above the node matching `location`.
    ///
    /// Explicit opt-in; location changes do not call this.
    pub fn reveal(&mut self, tree: &MenuTree, location: &str) {
        let path = active_path(tree, location);
        if let Some((_, ancestors)) = path.split_last() {
            for node in ancestors {
                self.expand(node.title());
            }
        }
    }
}
