//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{Navigator, NavigatorOptions};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{active_path, BreadcrumbTrail};
use crate::infrastructure::{menu_source_for, InfraError};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Trail {
            location,
            title,
            json,
        }) => cmd_trail(cli, location, title.as_deref(), *json),
        Some(Commands::Active { location }) => cmd_active(cli, location),
        Some(Commands::Tree {
            location,
            expand,
            reveal,
            all,
        }) => cmd_tree(cli, location.as_deref(), expand, *reveal, *all),
        Some(Commands::Check) => cmd_check(cli),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| InfraError::io("print help", e))?;
            Ok(())
        }
    }
}

fn config_dir(cli: &Cli) -> CliResult<PathBuf> {
    match &cli.config_dir {
        Some(dir) => Ok(dir.clone()),
        None => std::env::current_dir()
            .map_err(|e| InfraError::io("determine current directory", e).into()),
    }
}

/// Settings with command line overrides applied.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let dir = config_dir(cli)?;
    let mut settings = Settings::load(Some(&dir))?;
    if let Some(menu) = &cli.menu {
        settings.menu_file = Some(menu.clone());
    }
    if let Some(mode) = cli.prefix_match {
        settings.prefix_match = mode;
    }
    debug!(?settings, "effective settings");
    Ok(settings)
}

fn build_navigator(settings: &Settings) -> CliResult<Navigator> {
    let source = menu_source_for(settings.menu_file.as_deref());
    let tree = source.load(settings.max_depth)?;
    Ok(Navigator::new(
        tree,
        NavigatorOptions {
            prefix_match: settings.prefix_match,
            separator: settings.separator.clone(),
            root_label: source.describe(),
        },
    ))
}

/// Fallback page title: last path segment of the location.
fn default_title(location: &str) -> &str {
    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(location)
}

#[instrument(skip(cli))]
fn cmd_trail(cli: &Cli, location: &str, title: Option<&str>, json: bool) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let mut nav = build_navigator(&settings)?;
    let title = title.unwrap_or_else(|| default_title(location));
    let snapshot = nav.navigate(location, title);
    debug!(kind = ?snapshot.trail.kind(), "resolved trail");
    if json {
        output::info(&trail_json(&snapshot.trail)?);
    } else {
        output::page_header(&nav.header());
    }
    Ok(())
}

fn trail_json(trail: &BreadcrumbTrail) -> CliResult<String> {
    serde_json::to_string_pretty(trail).map_err(json_error)
}

fn json_error(e: serde_json::Error) -> CliError {
    InfraError::io("serialize trail", io::Error::from(e)).into()
}

#[instrument(skip(cli))]
fn cmd_active(cli: &Cli, location: &str) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let nav = build_navigator(&settings)?;
    let path = active_path(nav.tree(), location);
    if path.is_empty() {
        output::warning(&format!("no menu entry for {location}"));
        return Ok(());
    }
    for (level, node) in path.iter().enumerate() {
        output::info(&format!("{}{}", "  ".repeat(level), node));
    }
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_tree(
    cli: &Cli,
    location: Option<&str>,
    expand: &[String],
    reveal: bool,
    all: bool,
) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let mut nav = build_navigator(&settings)?;
    if let Some(location) = location {
        nav.navigate(location, default_title(location));
    }
    if all {
        nav.expand_all();
    }
    for title in expand {
        nav.expand(title)?;
    }
    if reveal {
        nav.reveal_current();
    }
    output::info(&nav.sidebar());
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_check(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let source = menu_source_for(settings.menu_file.as_deref());
    let tree = source.load(settings.max_depth)?;

    output::success(&format!(
        "{}: {} nodes, {} leaves, depth {}",
        source.describe(),
        tree.len(),
        tree.leaves().count(),
        tree.depth()
    ));
    for title in tree.title_collisions() {
        output::warning(&format!(
            "groups share the title '{title}' and expand together"
        ));
    }
    for destination in tree.duplicate_destinations() {
        output::warning(&format!(
            "destination '{destination}' is used more than once, the first entry wins"
        ));
    }
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            let dir = config_dir(cli)?;
            output::header("Config files");
            match global_config_path() {
                Some(path) => output::detail(&describe_path("global", &path)),
                None => output::detail(&"global: <no config directory>"),
            }
            output::detail(&describe_path("local", &local_config_path(&dir)));
            Ok(())
        }
        ConfigCommands::Init { global } => {
            let path = if *global {
                global_config_path()
                    .ok_or_else(|| CliError::Usage("no global config directory".into()))?
            } else {
                local_config_path(&config_dir(cli)?)
            };
            write_template(&path)?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}

fn describe_path(scope: &str, path: &Path) -> String {
    let state = if path.exists() { "exists" } else { "missing" };
    format!("{scope}: {} ({state})", path.display())
}

fn write_template(path: &Path) -> CliResult<()> {
    if path.exists() {
        return Err(CliError::Usage(format!(
            "config already exists: {}",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
    }
    std::fs::write(path, Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
    Ok(())
}
