//! Navigation session
//!
//! Owns the menu tree and the sidebar expansion state, and recomputes the
//! active chain and breadcrumb trail whenever the host reports a new location.

use termtree::Tree;
use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{
    active_titles, BreadcrumbResolver, BreadcrumbTrail, ExpansionState, MenuTree, PrefixMatch,
};
use crate::view::{self, render_sidebar, Header, NavEvent, SidebarMarkers};

/// Tunables for a navigation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorOptions {
    pub prefix_match: PrefixMatch,
    pub separator: String,
    pub root_label: String,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            prefix_match: PrefixMatch::default(),
            separator: " / ".to_string(),
            root_label: "menu".to_string(),
        }
    }
}

/// Derived navigation state for one location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub location: String,
    pub page_title: String,
    pub trail: BreadcrumbTrail,
    /// Titles of active menu nodes, pre-order
    pub active: Vec<String>,
}

/// Navigation session for one mounted sidebar + header.
pub struct Navigator {
    tree: MenuTree,
    options: NavigatorOptions,
    expansion: ExpansionState,
    snapshot: NavigationSnapshot,
}

impl Navigator {
    pub fn new(tree: MenuTree, options: NavigatorOptions) -> Self {
        for title in tree.title_collisions() {
            warn!(%title, "menu groups share a title and will expand together");
        }
        for destination in tree.duplicate_destinations() {
            warn!(%destination, "destination used by several menu nodes, first one wins");
        }
        Self {
            tree,
            options,
            expansion: ExpansionState::new(),
            snapshot: NavigationSnapshot::default(),
        }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn snapshot(&self) -> &NavigationSnapshot {
        &self.snapshot
    }

    /// Compute the snapshot for a location without touching session state.
    pub fn compute(&self, location: &str, page_title: &str) -> NavigationSnapshot {
        let resolver = BreadcrumbResolver::with_prefix_match(&self.tree, self.options.prefix_match);
        NavigationSnapshot {
            location: location.to_string(),
            page_title: page_title.to_string(),
            trail: resolver.resolve(location, page_title),
            active: active_titles(&self.tree, location)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Host router reported a location change. Expansion state is left alone.
    #[instrument(level = "debug", skip(self))]
    pub fn navigate(&mut self, location: &str, page_title: &str) -> &NavigationSnapshot {
        self.snapshot = self.compute(location, page_title);
        debug!(
            crumbs = self.snapshot.trail.len(),
            active = self.snapshot.active.len(),
            "navigated"
        );
        &self.snapshot
    }

    /// Toggle a group; leaves and unknown titles are rejected.
    pub fn toggle(&mut self, title: &str) -> ApplicationResult<bool> {
        if self.tree.find_group(title).is_none() {
            return Err(ApplicationError::UnknownGroup(title.to_string()));
        }
        Ok(self.expansion.toggle(title))
    }

    /// Expand a group without flipping it back if it is already open.
    pub fn expand(&mut self, title: &str) -> ApplicationResult<()> {
        if self.tree.find_group(title).is_none() {
            return Err(ApplicationError::UnknownGroup(title.to_string()));
        }
        self.expansion.expand(title);
        Ok(())
    }

    pub fn expand_all(&mut self) {
        let titles: Vec<String> = self.tree.groups().map(|g| g.title().to_string()).collect();
        for title in titles {
            self.expansion.expand(&title);
        }
    }

    /// Expand the groups leading to the current location.
    pub fn reveal_current(&mut self) {
        let location = self.snapshot.location.clone();
        self.expansion.reveal(&self.tree, &location);
    }

    /// Forward a sidebar event; returns the destination the host should navigate to.
    pub fn dispatch(&mut self, event: &NavEvent) -> Option<String> {
        view::handle(event, &self.tree, &mut self.expansion)
    }

    pub fn sidebar(&self) -> Tree<String> {
        let location = (!self.snapshot.location.is_empty()).then_some(self.snapshot.location.as_str());
        render_sidebar(
            &self.tree,
            &self.expansion,
            location,
            &self.options.root_label,
            SidebarMarkers::default(),
        )
    }

    pub fn header(&self) -> Header<'_> {
        Header::new(
            &self.snapshot.trail,
            &self.snapshot.page_title,
            &self.options.separator,
        )
    }
}
