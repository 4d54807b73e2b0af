//! Application layer: the navigation session and the built-in menu
//!
//! Glues the domain engine to the view; no I/O.

pub mod default_menu;
pub mod error;
pub mod services;

pub use default_menu::standard_menu;
pub use error::{ApplicationError, ApplicationResult};
pub use services::{NavigationSnapshot, Navigator, NavigatorOptions};
