//! Application services

pub mod navigation;

pub use navigation::{NavigationSnapshot, Navigator, NavigatorOptions};
