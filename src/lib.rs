//! Menu tree navigation engine.
//!
//! Given a static menu hierarchy and the current location, decides which menu
//! nodes are active, tracks which groups are expanded, and derives a
//! breadcrumb trail, falling back to prefix matching for pages that sit below
//! a listed menu entry.
//!
//! ```
//! use navcrumb::domain::{BreadcrumbResolver, Crumb, MenuNode, MenuTree};
//!
//! let tree = MenuTree::new(vec![
//!     MenuNode::leaf("Dashboard", "/dashboard"),
//!     MenuNode::group(
//!         "Manajemen",
//!         vec![MenuNode::leaf("Program Kerja", "/management/program-kerja")],
//!     ),
//! ])
//! .unwrap();
//!
//! let trail = BreadcrumbResolver::new(&tree)
//!     .resolve("/management/program-kerja/add-data", "Input Program");
//! assert_eq!(trail.labels(), vec!["Manajemen", "Program Kerja", "Input Program"]);
//! assert_eq!(trail.last(), Some(&Crumb::new("Input Program", "/management/program-kerja/add-data")));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
pub mod view;
