//! Presentation: sidebar and breadcrumb header rendering, user events.
//!
//! Delegates all decisions to the domain layer.

pub mod header;
pub mod sidebar;

pub use header::{render_header, Header};
pub use sidebar::{render_sidebar, SidebarMarkers};

use tracing::debug;

use crate::domain::{ExpansionState, MenuTree};

/// User interaction with the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// Expand or collapse the group with this title.
    Toggle(String),
    /// Follow the menu entry with this title.
    Navigate(String),
}

/// Apply a sidebar event.
///
/// Toggles only reach groups; leaves have no expansion affordance.
/// Returns the destination to navigate to, if any.
pub fn handle(event: &NavEvent, tree: &MenuTree, expansion: &mut ExpansionState) -> Option<String> {
    match event {
        NavEvent::Toggle(title) => {
            if tree.find_group(title).is_some() {
                expansion.toggle(title);
            } else {
                debug!(%title, "ignoring toggle on non-group");
            }
            None
        }
        NavEvent::Navigate(title) => tree
            .find_by_title(title)
            .and_then(|node| node.destination())
            .map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuNode;

    fn tree() -> MenuTree {
        MenuTree::new(vec![
            MenuNode::leaf("Dashboard", "/dashboard"),
            MenuNode::group(
                "Manajemen",
                vec![MenuNode::leaf("Program Kerja", "/management/program-kerja")],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn given_leaf_toggle_when_handling_then_state_unchanged() {
        let tree = tree();
        let mut expansion = ExpansionState::new();
        assert_eq!(handle(&NavEvent::Toggle("Dashboard".into()), &tree, &mut expansion), None);
        assert!(!expansion.is_expanded("Dashboard"));
    }

    #[test]
    fn given_group_toggle_when_handling_then_group_expands() {
        let tree = tree();
        let mut expansion = ExpansionState::new();
        handle(&NavEvent::Toggle("Manajemen".into()), &tree, &mut expansion);
        assert!(expansion.is_expanded("Manajemen"));
    }

    #[test]
    fn given_navigate_event_when_handling_then_returns_destination() {
        let tree = tree();
        let mut expansion = ExpansionState::new();
        assert_eq!(
            handle(&NavEvent::Navigate("Program Kerja".into()), &tree, &mut expansion),
            Some("/management/program-kerja".to_string())
        );
        assert_eq!(handle(&NavEvent::Navigate("Manajemen".into()), &tree, &mut expansion), None);
    }
}
