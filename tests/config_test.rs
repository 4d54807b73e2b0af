//! Settings loading from a local config directory.
//!
//! These tests run without a global config (temp directories only).

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use navcrumb::config::{local_config_path, Settings};
use navcrumb::domain::PrefixMatch;

#[test]
fn given_no_local_config_when_loading_then_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.prefix_match, PrefixMatch::Segment);
    assert_eq!(settings.separator, " / ");
    assert_eq!(settings.max_depth, 32);
}

#[test]
fn given_local_config_when_loading_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        local_config_path(dir.path()),
        r#"
menu_file = "menus/admin.json"
prefix_match = "raw"
separator = " > "
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(dir.path())).expect("load settings");

    assert_eq!(settings.prefix_match, PrefixMatch::Raw);
    assert_eq!(settings.separator, " > ");
    assert_eq!(
        settings.menu_file,
        Some(dir.path().join(PathBuf::from("menus/admin.json")))
    );
}

#[test]
fn given_invalid_prefix_mode_when_loading_then_errors() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "prefix_match = \"fuzzy\"\n").unwrap();

    let result = Settings::load(Some(dir.path()));

    assert!(result.is_err());
}

#[test]
fn given_zero_max_depth_when_loading_then_errors() {
    let dir = TempDir::new().unwrap();
    fs::write(local_config_path(dir.path()), "max_depth = 0\n").unwrap();

    assert!(Settings::load(Some(dir.path())).is_err());
}
