//! Hangar CLI Application
//!
//! Command-line interface for the hangar aircraft maintenance tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use hangar_core::{Coordinator, TrackerBuilder};
use log::{debug, info};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!("Hangar started with store at {}", tracker.database_path().display());

    let renderer = TerminalRenderer::new(!no_color);
    debug!("Rich output: {}, JSON output: {json}", renderer.is_rich());

    let cli = Cli::new(Coordinator::new(tracker), renderer, json);

    match command {
        Some(Aircraft { command }) => cli.handle_aircraft_command(command).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Import { command }) => cli.handle_import_command(command).await,
        Some(Stats) => cli.show_stats().await,
        None => cli.show_dashboard().await,
    }
}
