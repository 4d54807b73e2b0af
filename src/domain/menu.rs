//! Menu tree: the static hierarchy of navigable destinations.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Deserialize;

use crate::domain::error::{DomainError, DomainResult};

/// Destination marking a pure group header that cannot be navigated to.
pub const SENTINEL: &str = "#";

/// Default nesting limit enforced while loading a menu.
pub const MAX_DEPTH: usize = 32;

/// Raw menu entry as written in a menu description.
///
/// `destination` may be missing, empty or the sentinel for group headers.
/// Converted into a validated [`MenuNode`] by [`MenuTree::from_entries`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MenuEntry {
    pub title: String,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    pub fn new(title: impl Into<String>, destination: Option<&str>) -> Self {
        Self {
            title: title.into(),
            destination: destination.map(str::to_string),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<MenuEntry>) -> Self {
        self.children = children;
        self
    }
}

/// A node of the menu hierarchy.
///
/// Leaves always carry a real destination. Groups carry children and an
/// optional destination; `None` is the sentinel group header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    Leaf {
        title: String,
        destination: String,
    },
    Group {
        title: String,
        destination: Option<String>,
        children: Vec<MenuNode>,
    },
}

/// Normalize a raw destination: missing, empty and `#` all mean "not navigable".
fn navigable(destination: Option<&str>) -> Option<&str> {
    match destination.map(str::trim) {
        None | Some("") | Some(SENTINEL) => None,
        Some(d) => Some(d),
    }
}

impl MenuNode {
    pub fn leaf(title: impl Into<String>, destination: impl Into<String>) -> Self {
        MenuNode::Leaf {
            title: title.into(),
            destination: destination.into(),
        }
    }

    /// Group header without a destination of its own.
    pub fn group(title: impl Into<String>, children: Vec<MenuNode>) -> Self {
        MenuNode::Group {
            title: title.into(),
            destination: None,
            children,
        }
    }

    /// Group that is itself navigable.
    pub fn linked_group(
        title: impl Into<String>,
        destination: impl Into<String>,
        children: Vec<MenuNode>,
    ) -> Self {
        let destination = destination.into();
        MenuNode::Group {
            title: title.into(),
            destination: navigable(Some(&destination)).map(str::to_string),
            children,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MenuNode::Leaf { title, .. } | MenuNode::Group { title, .. } => title,
        }
    }

    /// Real destination, `None` for sentinel group headers.
    pub fn destination(&self) -> Option<&str> {
        match self {
            MenuNode::Leaf { destination, .. } => Some(destination),
            MenuNode::Group { destination, .. } => destination.as_deref(),
        }
    }

    /// Destination as written in a breadcrumb: the real one, or the sentinel.
    pub fn destination_or_sentinel(&self) -> &str {
        self.destination().unwrap_or(SENTINEL)
    }

    pub fn children(&self) -> &[MenuNode] {
        match self {
            MenuNode::Leaf { .. } => &[],
            MenuNode::Group { children, .. } => children,
        }
    }

    /// True for nodes that can be expanded in a sidebar.
    pub fn is_group(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn is_navigable(&self) -> bool {
        self.destination().is_some()
    }

    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(MenuNode::depth)
            .max()
            .unwrap_or(0)
    }

    fn from_entry(entry: MenuEntry, level: usize, max_depth: usize) -> DomainResult<Self> {
        if level > max_depth {
            return Err(DomainError::DepthExceeded {
                title: entry.title,
                max_depth,
            });
        }
        let destination = navigable(entry.destination.as_deref()).map(str::to_string);

        if entry.children.is_empty() {
            return match destination {
                Some(destination) => Ok(MenuNode::Leaf {
                    title: entry.title,
                    destination,
                }),
                None => Err(DomainError::LeafWithoutDestination { title: entry.title }),
            };
        }

        let children = entry
            .children
            .into_iter()
            .map(|child| MenuNode::from_entry(child, level + 1, max_depth))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(MenuNode::Group {
            title: entry.title,
            destination,
            children,
        })
    }

    fn validate(&self, parent: &str, level: usize, max_depth: usize) -> DomainResult<()> {
        if self.title().trim().is_empty() {
            return Err(DomainError::EmptyTitle {
                parent: parent.to_string(),
            });
        }
        if level > max_depth {
            return Err(DomainError::DepthExceeded {
                title: self.title().to_string(),
                max_depth,
            });
        }
        match self {
            MenuNode::Leaf { title, destination } => match navigable(Some(destination)) {
                None => {
                    return Err(DomainError::LeafWithoutDestination {
                        title: title.clone(),
                    })
                }
                Some(d) if d != destination => return Err(invalid_destination(title, destination)),
                Some(_) => {}
            },
            MenuNode::Group {
                title,
                destination,
                children,
            } => {
                if let Some(d) = destination {
                    // Sentinel groups carry `None`; a stored value must be a real, trimmed location.
                    if navigable(Some(d)) != Some(d.as_str()) {
                        return Err(invalid_destination(title, d));
                    }
                }
                if children.is_empty() && destination.is_none() {
                    return Err(DomainError::LeafWithoutDestination {
                        title: title.clone(),
                    });
                }
                for child in children {
                    child.validate(title, level + 1, max_depth)?;
                }
            }
        }
        Ok(())
    }
}

fn invalid_destination(title: &str, destination: &str) -> DomainError {
    DomainError::InvalidDestination {
        title: title.to_string(),
        destination: destination.to_string(),
    }
}

impl fmt::Display for MenuNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.destination_or_sentinel())
    }
}

/// Immutable, validated menu hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuTree {
    roots: Vec<MenuNode>,
}

impl MenuTree {
    /// Validate and wrap already constructed nodes.
    pub fn new(roots: Vec<MenuNode>) -> DomainResult<Self> {
        Self::with_max_depth(roots, MAX_DEPTH)
    }

    pub fn with_max_depth(roots: Vec<MenuNode>, max_depth: usize) -> DomainResult<Self> {
        for root in &roots {
            root.validate("<root>", 1, max_depth)?;
        }
        Ok(Self { roots })
    }

    /// Convert raw entries into a validated tree.
    pub fn from_entries(entries: Vec<MenuEntry>, max_depth: usize) -> DomainResult<Self> {
        let roots = entries
            .into_iter()
            .map(|entry| MenuNode::from_entry(entry, 1, max_depth))
            .collect::<DomainResult<Vec<_>>>()?;
        Self::with_max_depth(roots, max_depth)
    }

    pub fn roots(&self) -> &[MenuNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Pre-order traversal in declaration order.
    pub fn iter(&self) -> MenuIter<'_> {
        MenuIter::new(self)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn depth(&self) -> usize {
        self.roots.iter().map(MenuNode::depth).max().unwrap_or(0)
    }

    pub fn leaves(&self) -> impl Iterator<Item = &MenuNode> {
        self.iter().map(|(_, n)| n).filter(|n| !n.is_group())
    }

    pub fn groups(&self) -> impl Iterator<Item = &MenuNode> {
        self.iter().map(|(_, n)| n).filter(|n| n.is_group())
    }

    pub fn find_by_title(&self, title: &str) -> Option<&MenuNode> {
        self.iter().map(|(_, n)| n).find(|n| n.title() == title)
    }

    /// First group (pre-order) with the given title.
    pub fn find_group(&self, title: &str) -> Option<&MenuNode> {
        self.groups().find(|n| n.title() == title)
    }

    pub fn find_by_destination(&self, destination: &str) -> Option<&MenuNode> {
        self.iter()
            .map(|(_, n)| n)
            .find(|n| n.destination() == Some(destination))
    }

    /// Chain from a root down to the first node (pre-order) accepted by `pred`.
    pub fn chain_to<F>(&self, pred: F) -> Option<Vec<&MenuNode>>
    where
        F: Fn(&MenuNode) -> bool,
    {
        let mut path = Vec::new();
        if find_chain(&self.roots, &pred, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    /// Chain to the first node whose destination equals `location`.
    pub fn ancestor_chain(&self, location: &str) -> Option<Vec<&MenuNode>> {
        self.chain_to(|n| n.destination() == Some(location))
    }

    /// Group titles used by more than one group.
    ///
    /// Expansion state is keyed by title, so such groups expand together.
    pub fn title_collisions(&self) -> Vec<String> {
        duplicates(self.groups().map(MenuNode::title))
    }

    /// Destinations claimed by more than one node; the first in pre-order wins.
    pub fn duplicate_destinations(&self) -> Vec<String> {
        duplicates(self.iter().filter_map(|(_, n)| n.destination()))
    }
}

fn find_chain<'a, F>(nodes: &'a [MenuNode], pred: &F, path: &mut Vec<&'a MenuNode>) -> bool
where
    F: Fn(&MenuNode) -> bool,
{
    for node in nodes {
        path.push(node);
        if pred(node) || find_chain(node.children(), pred, path) {
            return true;
        }
        path.pop();
    }
    false
}

fn duplicates<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let sorted: BTreeMap<_, _> = counts.into_iter().filter(|(_, c)| *c > 1).collect();
    sorted.into_keys().map(str::to_string).collect()
}

/// Pre-order iterator yielding `(level, node)`, roots at level 1.
pub struct MenuIter<'a> {
    stack: Vec<(usize, &'a MenuNode)>,
}

impl<'a> MenuIter<'a> {
    fn new(tree: &'a MenuTree) -> Self {
        let stack = tree.roots.iter().rev().map(|n| (1, n)).collect();
        Self { stack }
    }
}

impl<'a> Iterator for MenuIter<'a> {
    type Item = (usize, &'a MenuNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (level, node) = self.stack.pop()?;
        // Reverse push keeps left-to-right order
        for child in node.children().iter().rev() {
            self.stack.push((level + 1, child));
        }
        Some((level, node))
    }
}

impl<'a> IntoIterator for &'a MenuTree {
    type Item = (usize, &'a MenuNode);
    type IntoIter = MenuIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
