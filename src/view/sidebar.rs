//! Sidebar rendering as a text tree.

use termtree::Tree;

use crate::domain::{is_active, ExpansionState, MenuNode, MenuTree};

/// Marker strings used in sidebar labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarMarkers<'a> {
    pub expanded: &'a str,
    pub collapsed: &'a str,
    pub active: &'a str,
}

impl Default for SidebarMarkers<'_> {
    fn default() -> Self {
        Self {
            expanded: "[-]",
            collapsed: "[+]",
            active: "*",
        }
    }
}

/// Render the menu as a tree under a `root_label` node.
///
/// Children of collapsed groups are omitted; active nodes carry the active marker.
pub fn render_sidebar(
    tree: &MenuTree,
    expansion: &ExpansionState,
    location: Option<&str>,
    root_label: &str,
    markers: SidebarMarkers<'_>,
) -> Tree<String> {
    let leaves: Vec<_> = tree
        .roots()
        .iter()
        .map(|node| render_node(node, expansion, location, markers))
        .collect();
    Tree::new(root_label.to_string()).with_leaves(leaves)
}

fn render_node(
    node: &MenuNode,
    expansion: &ExpansionState,
    location: Option<&str>,
    markers: SidebarMarkers<'_>,
) -> Tree<String> {
    let expanded = node.is_group() && expansion.is_expanded(node.title());

    let mut label = String::new();
    if node.is_group() {
        label.push_str(if expanded {
            markers.expanded
        } else {
            markers.collapsed
        });
        label.push(' ');
    }
    label.push_str(node.title());
    if let Some(destination) = node.destination() {
        label.push_str(&format!(" ({destination})"));
    }
    if location.is_some_and(|loc| is_active(loc, node)) {
        label.push(' ');
        label.push_str(markers.active);
    }

    let children: Vec<_> = if expanded {
        node.children()
            .iter()
            .map(|child| render_node(child, expansion, location, markers))
            .collect()
    } else {
        Vec::new()
    };
    Tree::new(label).with_leaves(children)
}
