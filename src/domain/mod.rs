//! Domain layer: the navigation engine
//!
//! Pure computations over an in-memory menu tree (no I/O, no CLI, no config loading).

pub mod active;
pub mod breadcrumb;
pub mod builder;
pub mod error;
pub mod expansion;
pub mod menu;

pub use active::{active_path, active_titles, is_active};
pub use breadcrumb::{BreadcrumbResolver, BreadcrumbTrail, Crumb, MatchKind, PrefixMatch, TrailSegment};
pub use builder::{FlatMenuItem, MenuBuilder};
pub use error::{DomainError, DomainResult};
pub use expansion::ExpansionState;
pub use menu::{MenuEntry, MenuIter, MenuNode, MenuTree, MAX_DEPTH, SENTINEL};
