//! Breadcrumb resolution: exact match first, prefix match as fallback.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::menu::{MenuNode, MenuTree, SENTINEL};

/// How a menu destination must relate to a location to count as its prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixMatch {
    /// Plain string prefix: `/a/b` also matches `/a/bc`.
    Raw,
    /// Prefix must end on a path segment boundary.
    #[default]
    Segment,
}

impl PrefixMatch {
    pub fn matches(self, location: &str, prefix: &str) -> bool {
        if prefix.is_empty() || !location.starts_with(prefix) {
            return false;
        }
        match self {
            PrefixMatch::Raw => true,
            PrefixMatch::Segment => {
                let rest = &location[prefix.len()..];
                rest.is_empty() || rest.starts_with('/') || prefix.ends_with('/')
            }
        }
    }
}

impl fmt::Display for PrefixMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixMatch::Raw => write!(f, "raw"),
            PrefixMatch::Segment => write!(f, "segment"),
        }
    }
}

impl FromStr for PrefixMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(PrefixMatch::Raw),
            "segment" => Ok(PrefixMatch::Segment),
            other => Err(format!("unknown prefix match mode: {other} (expected raw|segment)")),
        }
    }
}

/// One breadcrumb entry. `destination` is the sentinel for group headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: String,
    pub destination: String,
}

impl Crumb {
    pub fn new(label: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            destination: destination.into(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.destination == SENTINEL
    }

    fn from_node(node: &MenuNode) -> Self {
        Self::new(node.title(), node.destination_or_sentinel())
    }
}

/// How the trail was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Prefix,
    None,
}

/// A renderable trail entry; `href` is absent for non-linkable entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailSegment<'a> {
    pub label: &'a str,
    pub href: Option<&'a str>,
}

/// Ordered trail from a root menu entry to the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbTrail {
    crumbs: Vec<Crumb>,
    kind: MatchKind,
}

impl Default for BreadcrumbTrail {
    fn default() -> Self {
        Self {
            crumbs: Vec::new(),
            kind: MatchKind::None,
        }
    }
}

impl BreadcrumbTrail {
    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    pub fn last(&self) -> Option<&Crumb> {
        self.crumbs.last()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.crumbs.iter().map(|c| c.label.as_str()).collect()
    }

    /// Whether entry `idx` is rendered as a link.
    ///
    /// The last entry is the current page; sentinel entries go nowhere.
    pub fn is_linkable(&self, idx: usize) -> bool {
        match self.crumbs.get(idx) {
            Some(crumb) => idx + 1 < self.crumbs.len() && !crumb.is_sentinel(),
            None => false,
        }
    }

    pub fn segments(&self) -> Vec<TrailSegment<'_>> {
        self.crumbs
            .iter()
            .enumerate()
            .map(|(idx, crumb)| TrailSegment {
                label: &crumb.label,
                href: self
                    .is_linkable(idx)
                    .then_some(crumb.destination.as_str()),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a BreadcrumbTrail {
    type Item = &'a Crumb;
    type IntoIter = std::slice::Iter<'a, Crumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.crumbs.iter()
    }
}

/// Derives breadcrumb trails from a menu tree.
#[derive(Debug, Clone, Copy)]
pub struct BreadcrumbResolver<'a> {
    tree: &'a MenuTree,
    prefix_match: PrefixMatch,
}

impl<'a> BreadcrumbResolver<'a> {
    pub fn new(tree: &'a MenuTree) -> Self {
        Self::with_prefix_match(tree, PrefixMatch::default())
    }

    pub fn with_prefix_match(tree: &'a MenuTree, prefix_match: PrefixMatch) -> Self {
        Self { tree, prefix_match }
    }

    /// Resolve the trail for `location`.
    ///
    /// 1. Exact destination match: the ancestor chain of the first node in pre-order.
    /// 2. Otherwise the deepest node whose destination prefixes `location`
    ///    (sentinel groups are searched through), followed by a synthetic
    ///    `{fallback_title, location}` entry.
    /// 3. Otherwise an empty trail.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve(&self, location: &str, fallback_title: &str) -> BreadcrumbTrail {
        if let Some(chain) = self.tree.ancestor_chain(location) {
            debug!(depth = chain.len(), "exact match");
            return BreadcrumbTrail {
                crumbs: chain.into_iter().map(Crumb::from_node).collect(),
                kind: MatchKind::Exact,
            };
        }

        let mut best: Option<Vec<&MenuNode>> = None;
        let mut path = Vec::new();
        self.search_prefix(self.tree.roots(), location, &mut path, &mut best);

        match best {
            Some(chain) => {
                let mut crumbs: Vec<Crumb> = chain.iter().map(|n| Crumb::from_node(n)).collect();
                if chain.last().and_then(|n| n.destination()) != Some(location) {
                    crumbs.push(Crumb::new(fallback_title, location));
                }
                debug!(depth = crumbs.len(), "prefix match");
                BreadcrumbTrail {
                    crumbs,
                    kind: MatchKind::Prefix,
                }
            }
            None => {
                debug!("no match");
                BreadcrumbTrail::default()
            }
        }
    }

    fn search_prefix<'t>(
        &self,
        nodes: &'t [MenuNode],
        location: &str,
        path: &mut Vec<&'t MenuNode>,
        best: &mut Option<Vec<&'t MenuNode>>,
    ) {
        for node in nodes {
            match node.destination() {
                None => {
                    path.push(node);
                    self.search_prefix(node.children(), location, path, best);
                    path.pop();
                }
                Some(destination) if self.prefix_match.matches(location, destination) => {
                    path.push(node);
                    if is_better(path, best.as_deref()) {
                        *best = Some(path.clone());
                    }
                    self.search_prefix(node.children(), location, path, best);
                    path.pop();
                }
                Some(_) => {}
            }
        }
    }
}

/// More matched destinations on the chain win; sentinel headers do not count.
/// Then the longer final destination wins; otherwise the first found.
fn is_better(candidate: &[&MenuNode], best: Option<&[&MenuNode]>) -> bool {
    let Some(best) = best else {
        return true;
    };
    let rank = |chain: &[&MenuNode]| {
        let matched = chain.iter().filter(|n| n.is_navigable()).count();
        let length = chain
            .last()
            .and_then(|n| n.destination())
            .map_or(0, str::len);
        (matched, length)
    };
    rank(candidate) > rank(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PrefixMatch::Raw, "/a/b", "/a/b", true)]
    #[case(PrefixMatch::Raw, "/a/b2", "/a/b", true)]
    #[case(PrefixMatch::Segment, "/a/b2", "/a/b", false)]
    #[case(PrefixMatch::Segment, "/a/b/add", "/a/b", true)]
    #[case(PrefixMatch::Segment, "/a/b/add", "/a/", true)]
    #[case(PrefixMatch::Segment, "/a/b", "", false)]
    #[case(PrefixMatch::Raw, "/a", "/a/b", false)]
    fn given_mode_when_testing_prefix_then_matches_expected(
        #[case] mode: PrefixMatch,
        #[case] location: &str,
        #[case] prefix: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(mode.matches(location, prefix), expected);
    }

    #[rstest]
    #[case("raw", PrefixMatch::Raw)]
    #[case("Segment", PrefixMatch::Segment)]
    fn given_mode_name_when_parsing_then_returns_mode(#[case] input: &str, #[case] mode: PrefixMatch) {
        assert_eq!(input.parse::<PrefixMatch>().unwrap(), mode);
        assert!("boundary".parse::<PrefixMatch>().is_err());
    }

    #[test]
    fn given_trail_when_building_segments_then_last_and_sentinels_are_not_links() {
        let trail = BreadcrumbTrail {
            crumbs: vec![
                Crumb::new("Manajemen", "#"),
                Crumb::new("Program Kerja", "/management/program-kerja"),
                Crumb::new("Input Program", "/management/program-kerja/add-data"),
            ],
            kind: MatchKind::Prefix,
        };
        let hrefs: Vec<_> = trail.segments().iter().map(|s| s.href).collect();
        assert_eq!(hrefs, vec![None, Some("/management/program-kerja"), None]);
        assert!(!trail.is_linkable(3));
    }

    #[test]
    fn given_competing_prefixes_when_resolving_then_deepest_wins() {
        let tree = MenuTree::new(vec![
            MenuNode::leaf("Marketing", "/marketing"),
            MenuNode::group(
                "Laporan",
                vec![MenuNode::linked_group(
                    "Pemasaran",
                    "/marketing",
                    vec![MenuNode::leaf("Transaksi", "/marketing/transaction")],
                )],
            ),
        ])
        .unwrap();
        let trail = BreadcrumbResolver::new(&tree).resolve("/marketing/transaction/42", "Detail");
        assert_eq!(
            trail.labels(),
            vec!["Laporan", "Pemasaran", "Transaksi", "Detail"]
        );
        assert_eq!(trail.kind(), MatchKind::Prefix);
    }

    #[test]
    fn given_short_match_under_sentinel_group_when_resolving_then_longer_root_match_wins() {
        let tree = MenuTree::new(vec![
            MenuNode::group(
                "Manajemen",
                vec![MenuNode::leaf("Management", "/management")],
            ),
            MenuNode::leaf("Program Kerja", "/management/program-kerja"),
        ])
        .unwrap();
        let trail = BreadcrumbResolver::new(&tree).resolve("/management/program-kerja/add-data", "Input");
        assert_eq!(trail.labels(), vec!["Program Kerja", "Input"]);
    }

    #[test]
    fn given_navigable_group_not_prefixing_when_resolving_then_children_are_skipped() {
        let tree = MenuTree::new(vec![MenuNode::linked_group(
            "Produk",
            "/products",
            vec![MenuNode::leaf("Katalog", "/catalog")],
        )])
        .unwrap();
        let trail = BreadcrumbResolver::new(&tree).resolve("/catalog/new", "Baru");
        assert!(trail.is_empty());
        assert_eq!(trail.kind(), MatchKind::None);
    }
}
