use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AircraftCommands, ImportCommands, TaskCommands};

/// Aircraft maintenance tracker
///
/// Keeps a fleet of aircraft and their maintenance tasks in a local SQLite
/// database, imports both from CSV, XML and Excel files, and shows a
/// dashboard of pending and completed work. Without a subcommand the
/// dashboard is printed.
#[derive(Parser)]
#[command(version, about, name = "hangar")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/hangar/hangar.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Hangar CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage aircraft
    #[command(alias = "a")]
    Aircraft {
        #[command(subcommand)]
        command: AircraftCommands,
    },
    /// Manage maintenance tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Import aircraft or tasks from a .csv, .xml or .xlsx file
    #[command(alias = "i")]
    Import {
        #[command(subcommand)]
        command: ImportCommands,
    },
    /// Show the fleet dashboard with per-aircraft task counts
    Stats,
}
