//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Configuration errors: the static menu description violates a structural invariant.
///
/// These are programmer errors, raised once while the menu is loaded.
/// Matching and breadcrumb resolution never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("menu node without children needs a destination: {title}")]
    LeafWithoutDestination { title: String },

    #[error("menu node {title} has an unusable destination: {destination:?}")]
    InvalidDestination { title: String, destination: String },

    #[error("menu node has an empty title (parent: {parent})")]
    EmptyTitle { parent: String },

    #[error("menu nesting exceeds maximum depth {max_depth} at: {title}")]
    DepthExceeded { title: String, max_depth: usize },

    #[error("cycle detected in menu hierarchy at: {0}")]
    CycleDetected(String),

    #[error("menu item {id} references unknown parent: {parent}")]
    UnknownParent { id: String, parent: String },

    #[error("duplicate menu item id: {0}")]
    DuplicateId(String),
}

/// Result type for menu construction.
pub type DomainResult<T> = Result<T, DomainError>;
