//! Infrastructure layer: menu description loading
//!
//! Turns files or built-in data into validated menu trees.

pub mod error;
pub mod menu_source;

pub use error::{InfraError, InfraResult};
pub use menu_source::{menu_source_for, BuiltinMenuSource, FileMenuSource, MenuFormat, MenuSource};
