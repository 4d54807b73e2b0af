//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::domain::PrefixMatch;

/// Menu tree navigation: active-path matching, sidebar expansion and breadcrumbs
#[derive(Parser, Debug)]
#[command(name = "navcrumb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Menu description file, TOML or JSON (default: from config, else built-in)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub menu: Option<PathBuf>,

    /// Directory holding a local .navcrumb.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    /// Breadcrumb prefix fallback: raw | segment
    #[arg(long, global = true)]
    pub prefix_match: Option<PrefixMatch>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the breadcrumb header for a location
    Trail {
        /// Current location, e.g. /management/program-kerja/add-data
        location: String,
        /// Page title, used as label for pages below a menu entry
        #[arg(short, long)]
        title: Option<String>,
        /// Print the trail as JSON
        #[arg(long)]
        json: bool,
    },

    /// List menu nodes active for a location
    Active {
        /// Current location
        location: String,
    },

    /// Show the sidebar
    Tree {
        /// Current location (marks active nodes)
        #[arg(short, long)]
        location: Option<String>,
        /// Expand group by title (repeatable)
        #[arg(short, long = "expand")]
        expand: Vec<String>,
        /// Expand the groups leading to --location
        #[arg(long, requires = "location")]
        reveal: bool,
        /// Expand every group
        #[arg(short, long)]
        all: bool,
    },

    /// Validate the menu description
    Check,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init {
        /// Create global config
        #[arg(short, long)]
        global: bool,
    },

    /// Show config paths
    Path,
}
