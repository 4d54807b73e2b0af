//! Menu sources: menu description files (TOML/JSON) and the built-in menu.
//!
//! A document holds either nested entries:
//!
//! ```toml
//! [[menu]]
//! title = "Manajemen"
//! destination = "#"
//!   [[menu.children]]
//!   title = "Program Kerja"
//!   destination = "/management/program-kerja"
//! ```
//!
//! or flat items linked by `parent` ids (`[[item]]` with `id`, `parent`,
//! `title`, `destination`). JSON additionally accepts a bare array of nested entries.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::standard_menu;
use crate::domain::{FlatMenuItem, MenuBuilder, MenuEntry, MenuTree};
use crate::infrastructure::{InfraError, InfraResult};

/// Where a menu tree comes from.
pub trait MenuSource: Send + Sync {
    /// Load and validate the menu.
    fn load(&self, max_depth: usize) -> InfraResult<MenuTree>;

    /// Human readable origin, for diagnostics.
    fn describe(&self) -> String;
}

/// Supported menu description formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFormat {
    Toml,
    Json,
}

impl MenuFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> InfraResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(MenuFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(MenuFormat::Json),
            _ => Err(InfraError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MenuDocument {
    menu: Vec<MenuEntry>,
    item: Vec<FlatMenuItem>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    Nested(Vec<MenuEntry>),
    Document(MenuDocument),
}

/// Parse a menu description into a validated tree.
///
/// `origin` only labels errors.
pub fn parse_menu(
    content: &str,
    format: MenuFormat,
    origin: &Path,
    max_depth: usize,
) -> InfraResult<MenuTree> {
    let document = match format {
        MenuFormat::Toml => {
            toml::from_str::<MenuDocument>(content).map_err(|e| InfraError::parse(origin, e))?
        }
        MenuFormat::Json => match serde_json::from_str::<JsonDocument>(content)
            .map_err(|e| InfraError::parse(origin, e))?
        {
            JsonDocument::Nested(menu) => MenuDocument {
                menu,
                item: Vec::new(),
            },
            JsonDocument::Document(document) => document,
        },
    };

    if !document.menu.is_empty() && !document.item.is_empty() {
        return Err(InfraError::parse(
            origin,
            "use either nested `menu` entries or flat `item` entries, not both",
        ));
    }

    let tree = if document.item.is_empty() {
        MenuTree::from_entries(document.menu, max_depth)?
    } else {
        MenuBuilder::with_max_depth(max_depth).build(&document.item)?
    };
    debug!(nodes = tree.len(), depth = tree.depth(), "parsed menu");
    Ok(tree)
}

/// Menu description stored in a file.
#[derive(Debug, Clone)]
pub struct FileMenuSource {
    path: PathBuf,
}

impl FileMenuSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MenuSource for FileMenuSource {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn load(&self, max_depth: usize) -> InfraResult<MenuTree> {
        let format = MenuFormat::from_path(&self.path)?;
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| InfraError::io(format!("read menu file {}", self.path.display()), e))?;
        parse_menu(&content, format, &self.path, max_depth)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The compiled-in administration menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMenuSource;

impl MenuSource for BuiltinMenuSource {
    fn load(&self, max_depth: usize) -> InfraResult<MenuTree> {
        let tree = standard_menu()?;
        Ok(MenuTree::with_max_depth(tree.roots().to_vec(), max_depth)?)
    }

    fn describe(&self) -> String {
        "<built-in>".to_string()
    }
}

/// File source when a menu file is configured, built-in menu otherwise.
pub fn menu_source_for(menu_file: Option<&Path>) -> Box<dyn MenuSource> {
    match menu_file {
        Some(path) => Box::new(FileMenuSource::new(path)),
        None => Box::new(BuiltinMenuSource),
    }
}
