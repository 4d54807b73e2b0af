//! Builds a menu tree from flat `id`/`parent` item lists.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::menu::{MenuEntry, MenuTree, MAX_DEPTH};

/// Menu item declared with an explicit parent reference instead of nesting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FlatMenuItem {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
    pub title: String,
    #[serde(default)]
    pub destination: Option<String>,
}

impl FlatMenuItem {
    pub fn new(id: &str, parent: Option<&str>, title: &str, destination: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            parent: parent.map(str::to_string),
            title: title.to_string(),
            destination: destination.map(str::to_string),
        }
    }
}

/// Assembles flat items into a hierarchy, preserving declaration order.
pub struct MenuBuilder {
    max_depth: usize,
    relationship_cache: HashMap<String, Vec<usize>>,
    visited_ids: HashSet<String>,
}

impl Default for MenuBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuBuilder {
    pub fn new() -> Self {
        Self::with_max_depth(MAX_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            relationship_cache: HashMap::new(),
            visited_ids: HashSet::new(),
        }
    }

    /// Build a validated tree from flat items.
    ///
    /// Items whose parent chain never reaches a root form a cycle and are rejected.
    pub fn build(&mut self, items: &[FlatMenuItem]) -> DomainResult<MenuTree> {
        self.relationship_cache.clear();
        self.visited_ids.clear();

        let mut known = HashSet::new();
        for item in items {
            if !known.insert(item.id.as_str()) {
                return Err(DomainError::DuplicateId(item.id.clone()));
            }
        }

        let mut roots = Vec::new();
        for (idx, item) in items.iter().enumerate() {
            match &item.parent {
                None => roots.push(idx),
                Some(parent) if !known.contains(parent.as_str()) => {
                    return Err(DomainError::UnknownParent {
                        id: item.id.clone(),
                        parent: parent.clone(),
                    });
                }
                Some(parent) => self
                    .relationship_cache
                    .entry(parent.clone())
                    .or_default()
                    .push(idx),
            }
        }

        // Items exist but none is a root: every item sits on a cycle
        if roots.is_empty() {
            if let Some(first) = items.first() {
                return Err(DomainError::CycleDetected(first.id.clone()));
            }
        }

        let entries = roots
            .into_iter()
            .map(|idx| self.build_entry(items, idx, 1))
            .collect::<DomainResult<Vec<_>>>()?;

        if let Some(stranded) = items.iter().find(|i| !self.visited_ids.contains(&i.id)) {
            return Err(DomainError::CycleDetected(stranded.id.clone()));
        }

        MenuTree::from_entries(entries, self.max_depth)
    }

    fn build_entry(
        &mut self,
        items: &[FlatMenuItem],
        idx: usize,
        level: usize,
    ) -> DomainResult<MenuEntry> {
        let item = &items[idx];
        if !self.visited_ids.insert(item.id.clone()) {
            return Err(DomainError::CycleDetected(item.id.clone()));
        }
        if level > self.max_depth {
            return Err(DomainError::DepthExceeded {
                title: item.title.clone(),
                max_depth: self.max_depth,
            });
        }

        let child_indices = self
            .relationship_cache
            .get(&item.id)
            .cloned()
            .unwrap_or_default();
        let children = child_indices
            .into_iter()
            .map(|child| self.build_entry(items, child, level + 1))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(MenuEntry::new(item.title.clone(), item.destination.as_deref()).with_children(children))
    }
}
