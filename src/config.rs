//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/navcrumb/navcrumb.toml`
//! 3. Local config: `<dir>/.navcrumb.toml`
//! 4. Environment variables: `NAVCRUMB_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{PrefixMatch, MAX_DEPTH};

/// Unified configuration for navcrumb.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Menu description file (TOML or JSON); built-in menu when unset
    pub menu_file: Option<PathBuf>,
    /// Prefix fallback mode for breadcrumbs
    pub prefix_match: PrefixMatch,
    /// Separator between breadcrumb labels
    pub separator: String,
    /// Maximum menu nesting accepted on load
    pub max_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            menu_file: None,
            prefix_match: PrefixMatch::default(),
            separator: " / ".to_string(),
            max_depth: MAX_DEPTH,
        }
    }
}

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub menu_file: Option<PathBuf>,
    pub prefix_match: Option<PrefixMatch>,
    pub separator: Option<String>,
    pub max_depth: Option<usize>,
}

/// Get the XDG config directory for navcrumb.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "navcrumb").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("navcrumb.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".navcrumb.toml")
}

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
pub fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            menu_file: overlay
                .menu_file
                .clone()
                .or_else(|| self.menu_file.clone()),
            prefix_match: overlay.prefix_match.unwrap_or(self.prefix_match),
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
            max_depth: overlay.max_depth.unwrap_or(self.max_depth),
        }
    }

    /// Relative menu paths in a config file resolve against that file's directory.
    fn anchor_menu_file(mut raw: RawSettings, config_dir: Option<&Path>) -> RawSettings {
        if let (Some(menu), Some(dir)) = (raw.menu_file.as_ref(), config_dir) {
            let expanded = PathBuf::from(expand_path(&menu.to_string_lossy()));
            raw.menu_file = Some(if expanded.is_absolute() {
                expanded
            } else {
                dir.join(expanded)
            });
        }
        raw
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.navcrumb.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&Self::anchor_menu_file(raw, global_path.parent()));
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&Self::anchor_menu_file(raw, Some(dir)));
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();
        current.validate()?;

        Ok(current)
    }

    /// Apply NAVCRUMB_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NAVCRUMB")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("menu_file") {
            settings.menu_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("prefix_match") {
            settings.prefix_match = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_string("separator") {
            settings.separator = val;
        }
        if let Ok(val) = config.get_string("max_depth") {
            settings.max_depth = val.parse().map_err(|e| ApplicationError::Config {
                message: format!("NAVCRUMB_MAX_DEPTH={val}: {e}"),
            })?;
        }

        Ok(settings)
    }

    fn expand_paths(&mut self) {
        if let Some(menu) = &self.menu_file {
            self.menu_file = Some(PathBuf::from(expand_path(&menu.to_string_lossy())));
        }
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.max_depth == 0 {
            return Err(ApplicationError::Config {
                message: "max_depth must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# navcrumb configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/navcrumb/navcrumb.toml
#   Local:  <dir>/.navcrumb.toml
#   Env:    NAVCRUMB_* environment variables

# Menu description (TOML or JSON). Relative paths resolve against this file.
# Built-in menu is used when unset.
# menu_file = "menu.toml"

# Breadcrumb prefix fallback: "segment" requires a "/" boundary after the
# matched destination, "raw" is a plain string prefix.
# prefix_match = "segment"

# Separator between breadcrumb labels
# separator = " / "

# Maximum menu nesting accepted when loading
# max_depth = 32
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_overlay_when_merging_then_keeps_base() {
        let base = Settings::default();
        let merged = base.merge_with(&RawSettings::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn given_overlay_when_merging_then_overlay_wins() {
        let overlay = RawSettings {
            menu_file: Some(PathBuf::from("/etc/menu.json")),
            prefix_match: Some(PrefixMatch::Raw),
            separator: None,
            max_depth: Some(4),
        };
        let merged = Settings::default().merge_with(&overlay);
        assert_eq!(merged.menu_file, Some(PathBuf::from("/etc/menu.json")));
        assert_eq!(merged.prefix_match, PrefixMatch::Raw);
        assert_eq!(merged.separator, " / ");
        assert_eq!(merged.max_depth, 4);
    }

    #[test]
    fn given_relative_menu_file_when_anchoring_then_joins_config_dir() {
        let raw = RawSettings {
            menu_file: Some(PathBuf::from("menu.toml")),
            ..Default::default()
        };
        let anchored = Settings::anchor_menu_file(raw, Some(Path::new("/srv/app")));
        assert_eq!(anchored.menu_file, Some(PathBuf::from("/srv/app/menu.toml")));
    }

    #[test]
    fn given_tilde_in_menu_file_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            menu_file: Some(PathBuf::from("~/menu.toml")),
            ..Default::default()
        };
        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let menu = settings.menu_file.unwrap();
        assert!(menu.to_string_lossy().starts_with(&home));
    }

    #[test]
    fn given_default_settings_when_serializing_then_lists_defaults() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("prefix_match = \"segment\""));
        assert!(toml.contains("max_depth = 32"));
        let template = Settings::template();
        assert!(template.contains("prefix_match"));
    }
}
