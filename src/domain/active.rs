//! Active-node matching for sidebar highlighting.

use crate::domain::menu::{MenuNode, MenuTree};

/// True if `node` points at `location` or any descendant does.
///
/// Sentinel groups never equal a location, so they are only active through a child.
pub fn is_active(location: &str, node: &MenuNode) -> bool {
    node.destination() == Some(location)
        || node
            .children()
            .iter()
            .any(|child| is_active(location, child))
}

/// Chain from a root to the first node whose destination equals `location`.
///
/// Empty when nothing matches.
pub fn active_path<'a>(tree: &'a MenuTree, location: &str) -> Vec<&'a MenuNode> {
    tree.ancestor_chain(location).unwrap_or_default()
}

/// Titles of every active node, in pre-order.
pub fn active_titles<'a>(tree: &'a MenuTree, location: &str) -> Vec<&'a str> {
    tree.iter()
        .map(|(_, n)| n)
        .filter(|n| is_active(location, n))
        .map(MenuNode::title)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::SENTINEL;

    fn tree() -> MenuTree {
        MenuTree::new(vec![
            MenuNode::leaf("Dashboard", "/dashboard"),
            MenuNode::group(
                "Manajemen",
                vec![
                    MenuNode::leaf("Program Kerja", "/management/program-kerja"),
                    MenuNode::linked_group(
                        "Anggaran",
                        "/management/budget",
                        vec![MenuNode::leaf("Realisasi", "/management/budget/realization")],
                    ),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn given_location_of_nested_leaf_when_matching_then_only_chain_is_active() {
        let tree = tree();
        let location = "/management/budget/realization";
        let chain: Vec<_> = active_path(&tree, location)
            .iter()
            .map(|n| n.title())
            .collect();
        assert_eq!(chain, vec!["Manajemen", "Anggaran", "Realisasi"]);

        for (_, node) in tree.iter() {
            assert_eq!(
                is_active(location, node),
                chain.contains(&node.title()),
                "unexpected activity for {}",
                node.title()
            );
        }
    }

    #[test]
    fn given_navigable_group_location_when_matching_then_children_are_inactive() {
        let tree = tree();
        assert_eq!(
            active_titles(&tree, "/management/budget"),
            vec!["Manajemen", "Anggaran"]
        );
    }

    #[test]
    fn given_sentinel_location_when_matching_then_nothing_is_active() {
        let tree = tree();
        assert!(active_titles(&tree, SENTINEL).is_empty());
        assert!(active_path(&tree, "/unknown").is_empty());
    }

    #[test]
    fn given_same_inputs_when_matching_twice_then_results_are_identical() {
        let tree = tree();
        let first = active_titles(&tree, "/management/program-kerja");
        let second = active_titles(&tree, "/management/program-kerja");
        assert_eq!(first, second);
    }
}
