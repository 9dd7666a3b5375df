//! Command line interface for recordwatch.

pub mod commands;
pub mod interactive;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::config::DEFAULT_CONFIG_FILE;

/// recordwatch - recently seen records from your clipboard and window titles.
#[derive(Parser, Debug)]
#[command(name = "recordwatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Writes a default configuration file.
    Init {
        /// Target directory (default: current directory).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Watches the clipboard and the active window title.
    Watch {
        /// Poll interval in milliseconds (overrides the config).
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Do not read the system clipboard.
        #[arg(long)]
        no_clipboard: bool,
    },

    /// Replays a scripted session.
    Replay {
        /// Script file.
        file: PathBuf,

        /// Print one JSON object per step.
        #[arg(long)]
        json: bool,
    },

    /// Shows the popup menu and prints the selected hierarchy.
    Menu {
        /// JSON file with the menu structure.
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print every item hierarchy instead of prompting.
        #[arg(short, long)]
        list: bool,
    },

    /// Shows or edits the configuration.
    Config {
        /// Print the effective configuration as TOML and exit.
        #[arg(short, long)]
        show: bool,
    },

    /// Shows version.
    Version,
}
