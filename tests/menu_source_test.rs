//! Loading menu descriptions from files.

use std::path::PathBuf;

use tempfile::TempDir;

use navcrumb::application::ApplicationError;
use navcrumb::domain::{BreadcrumbResolver, DomainError, MAX_DEPTH};
use navcrumb::infrastructure::{menu_source_for, FileMenuSource, InfraError, MenuSource};

fn write_menu(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write menu file");
    path
}

const NESTED_TOML: &str = r##"
[[menu]]
title = "Dashboard"
destination = "/dashboard"

[[menu]]
title = "Manajemen"
destination = "#"

  [[menu.children]]
  title = "Program Kerja"
  destination = "/management/program-kerja"

  [[menu.children]]
  title = "Risiko"
  destination = "/management/risk"
"##;

#[test]
fn given_nested_toml_menu_when_loading_then_resolves_breadcrumbs() {
    let temp = TempDir::new().unwrap();
    let path = write_menu(&temp, "menu.toml", NESTED_TOML);

    let tree = FileMenuSource::new(&path).load(MAX_DEPTH).unwrap();

    assert_eq!(tree.len(), 4);
    let trail = BreadcrumbResolver::new(&tree).resolve("/management/risk/add-data", "Input Risiko");
    assert_eq!(trail.labels(), vec!["Manajemen", "Risiko", "Input Risiko"]);
}

#[test]
fn given_json_document_when_loading_then_builds_tree() {
    let temp = TempDir::new().unwrap();
    let path = write_menu(
        &temp,
        "menu.json",
        r##"{"menu": [
            {"title": "Pengguna", "destination": "/users"},
            {"title": "Marketing", "children": [
                {"title": "Produk", "destination": "/marketing/product"}
            ]}
        ]}"##,
    );

    let tree = FileMenuSource::new(&path).load(MAX_DEPTH).unwrap();

    assert_eq!(tree.roots()[1].destination(), None);
    assert_eq!(tree.depth(), 2);
}

#[test]
fn given_flat_items_with_cycle_when_loading_then_configuration_error() {
    let temp = TempDir::new().unwrap();
    let path = write_menu(
        &temp,
        "menu.toml",
        r#"
[[item]]
id = "a"
parent = "b"
title = "A"
destination = "/a"

[[item]]
id = "b"
parent = "a"
title = "B"
destination = "/b"
"#,
    );

    let result = FileMenuSource::new(&path).load(MAX_DEPTH);

    match result {
        Err(InfraError::Application(ApplicationError::Domain(DomainError::CycleDetected(id)))) => {
            assert_eq!(id, "a");
        }
        other => panic!("expected cycle error, got {other:?}"),
    }
}

#[test]
fn given_depth_limit_when_loading_then_rejects_deeper_menu() {
    let temp = TempDir::new().unwrap();
    let path = write_menu(&temp, "menu.toml", NESTED_TOML);

    let result = FileMenuSource::new(&path).load(1);

    assert!(matches!(
        result,
        Err(InfraError::Application(ApplicationError::Domain(
            DomainError::DepthExceeded { max_depth: 1, .. }
        )))
    ));
}

#[test]
fn given_malformed_file_when_loading_then_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = write_menu(&temp, "menu.toml", "[[menu]]\ntitle = ");

    let result = FileMenuSource::new(&path).load(MAX_DEPTH);

    assert!(matches!(result, Err(InfraError::Parse { .. })));
}

#[test]
fn given_missing_file_when_loading_then_io_error() {
    let temp = TempDir::new().unwrap();
    let result = FileMenuSource::new(temp.path().join("absent.toml")).load(MAX_DEPTH);
    assert!(matches!(result, Err(InfraError::Io { .. })));
}

#[test]
fn given_no_menu_file_when_selecting_source_then_uses_builtin_menu() {
    let source = menu_source_for(None);
    let tree = source.load(MAX_DEPTH).unwrap();
    assert_eq!(source.describe(), "<built-in>");
    assert!(tree.find_by_destination("/management/program-kerja").is_some());
}
