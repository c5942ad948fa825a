//! Command definitions and command execution.
//!
//! Argument structs carry clap derives and convert into the core parameter
//! types with `From`, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Coordinator
//! ```
//!
//! [`Cli`] runs a parsed command against the [`Coordinator`] and renders
//! the outcome as markdown, or as JSON with `--json`.

use std::{fmt::Display, path::PathBuf};

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand, ValueEnum};
use hangar_core::{
    coordinator::Reloaded,
    display::{
        AircraftList, AircraftSummaries, CreateResult, DeleteResult, OperationStatus, TaskList,
        UpdateResult,
    },
    models::parse_due_date,
    params::*,
    Coordinator, TaskStatus,
};
use jiff::civil::Date;
use log::debug;
use serde::Serialize;

use crate::renderer::TerminalRenderer;

/// Register a new aircraft
#[derive(Args)]
pub struct AddAircraftArgs {
    #[arg(help = "Manufacturer model, e.g. \"Airbus A320\"")]
    pub model: String,
    #[arg(help = "Registration mark; must not be in use by another aircraft")]
    pub tail_number: String,
}

impl From<AddAircraftArgs> for CreateAircraft {
    fn from(val: AddAircraftArgs) -> Self {
        CreateAircraft {
            model: val.model,
            tail_number: val.tail_number,
        }
    }
}

/// Change model and tail number of an aircraft
#[derive(Args)]
pub struct UpdateAircraftArgs {
    #[arg(help = "Unique identifier of the aircraft to update")]
    pub id: u64,
    #[arg(help = "New manufacturer model")]
    pub model: String,
    #[arg(help = "New registration mark")]
    pub tail_number: String,
}

impl From<UpdateAircraftArgs> for UpdateAircraft {
    fn from(val: UpdateAircraftArgs) -> Self {
        UpdateAircraft {
            id: val.id,
            model: val.model,
            tail_number: val.tail_number,
        }
    }
}

/// Select an aircraft by ID
#[derive(Args)]
pub struct AircraftIdArgs {
    #[arg(help = "Unique identifier of the aircraft")]
    pub id: u64,
}

impl From<AircraftIdArgs> for Id {
    fn from(val: AircraftIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum AircraftCommands {
    /// List all aircraft
    #[command(alias = "l")]
    List,
    /// Register a new aircraft
    #[command(alias = "a")]
    Add(AddAircraftArgs),
    /// Change model and tail number of an aircraft
    #[command(alias = "u")]
    Update(UpdateAircraftArgs),
    /// Delete an aircraft together with its maintenance tasks
    #[command(alias = "d")]
    Delete(AircraftIdArgs),
    /// Show an aircraft with its maintenance tasks
    #[command(alias = "s")]
    Show(AircraftIdArgs),
}

/// Schedule a maintenance task
///
/// New tasks always start out pending.
#[derive(Args)]
pub struct AddTaskArgs {
    #[arg(help = "ID of the aircraft the task is for")]
    pub aircraft_id: u64,
    #[arg(help = "What has to be done")]
    pub description: String,
    #[arg(help = "Due date as YYYY-MM-DD", value_parser = due_date_arg)]
    pub due_date: Date,
}

fn due_date_arg(raw: &str) -> Result<Date, String> {
    parse_due_date(raw).map_err(|_| format!("'{raw}' is not a date in YYYY-MM-DD form"))
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            aircraft_id: val.aircraft_id,
            description: val.description,
            due_date: val.due_date,
        }
    }
}

/// Set the status of a maintenance task
#[derive(Args)]
pub struct TaskStatusArgs {
    #[arg(help = "Unique identifier of the task")]
    pub id: u64,
    #[arg(help = "New status")]
    pub status: TaskStatusArg,
}

impl From<TaskStatusArgs> for UpdateTaskStatus {
    fn from(val: TaskStatusArgs) -> Self {
        UpdateTaskStatus {
            id: val.id,
            status: val.status.into(),
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List all maintenance tasks, earliest due date first
    #[command(alias = "l")]
    List,
    /// Schedule a maintenance task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Set the status of a maintenance task
    #[command(alias = "s")]
    Status(TaskStatusArgs),
}

/// Command-line representation of task status values
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TaskStatusArg {
    /// Not yet done
    Pending,
    /// Carried out
    Completed,
}

impl From<TaskStatusArg> for TaskStatus {
    fn from(val: TaskStatusArg) -> Self {
        match val {
            TaskStatusArg::Pending => TaskStatus::Pending,
            TaskStatusArg::Completed => TaskStatus::Completed,
        }
    }
}

/// File to import
#[derive(Args)]
pub struct ImportFileArgs {
    #[arg(help = "Path to a .csv, .xml or .xlsx file")]
    pub file: PathBuf,
}

impl From<ImportFileArgs> for ImportFile {
    fn from(val: ImportFileArgs) -> Self {
        ImportFile { path: val.file }
    }
}

#[derive(Subcommand)]
pub enum ImportCommands {
    /// Import aircraft (model, tailNumber); known tail numbers are skipped
    Aircraft(ImportFileArgs),
    /// Import maintenance tasks (aircraftId, description, dueDate, status)
    Tasks(ImportFileArgs),
}

/// Runs parsed commands and prints their outcome.
pub struct Cli {
    coordinator: Coordinator,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(coordinator: Coordinator, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            coordinator,
            renderer,
            json,
        }
    }

    /// Prints `value` as JSON or `markdown` through the renderer.
    fn emit<T: Serialize>(&self, value: &T, markdown: &dyn Display) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        } else {
            self.renderer.render(&markdown.to_string())
        }
    }

    /// Prints the outcome of a fleet change followed by the reloaded fleet.
    fn emit_reloaded<T: Serialize>(
        &self,
        reloaded: &Reloaded<T>,
        result: &dyn Display,
    ) -> Result<()> {
        let fleet = AircraftList(reloaded.aircraft.clone());
        let markdown = format!(
            "{result}\n## Fleet ({} aircraft)\n\n{fleet}",
            fleet.len()
        );
        self.emit(reloaded, &markdown)
    }

    pub async fn handle_aircraft_command(&self, command: AircraftCommands) -> Result<()> {
        match command {
            AircraftCommands::List => {
                let aircraft = self.coordinator.list_aircraft().await?;
                self.emit(&aircraft, &AircraftList(aircraft.clone()))
            }
            AircraftCommands::Add(args) => {
                let reloaded = self.coordinator.create_aircraft(&args.into()).await?;
                let result = CreateResult::new(reloaded.outcome.clone());
                self.emit_reloaded(&reloaded, &result)
            }
            AircraftCommands::Update(args) => {
                let reloaded = self.coordinator.update_aircraft(&args.into()).await?;
                match &reloaded.outcome {
                    Some(aircraft) => {
                        self.emit_reloaded(&reloaded, &UpdateResult::new(aircraft.clone()))
                    }
                    None => self.emit_reloaded(
                        &reloaded,
                        &OperationStatus::unchanged(reloaded.message.clone()),
                    ),
                }
            }
            AircraftCommands::Delete(args) => {
                let reloaded = self.coordinator.delete_aircraft(&args.into()).await?;
                match &reloaded.outcome {
                    Some(aircraft) => {
                        self.emit_reloaded(&reloaded, &DeleteResult::new(aircraft.clone()))
                    }
                    None => self.emit_reloaded(
                        &reloaded,
                        &OperationStatus::unchanged(reloaded.message.clone()),
                    ),
                }
            }
            AircraftCommands::Show(args) => {
                let id = args.id;
                let detail = self
                    .coordinator
                    .show_aircraft(&args.into())
                    .await?
                    .ok_or_else(|| anyhow!("Aircraft with ID {id} not found"))?;
                self.emit(&detail, &detail)
            }
        }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::List => {
                let tasks = self.coordinator.list_tasks().await?;
                self.emit(&tasks, &TaskList(tasks.clone()))
            }
            TaskCommands::Add(args) => {
                let task = self.coordinator.create_task(&args.into()).await?;
                self.emit(&task, &CreateResult::new(task.clone()))
            }
            TaskCommands::Status(args) => {
                match self.coordinator.update_task_status(&args.into()).await? {
                    Some(task) => self.emit(&task, &UpdateResult::new(task.clone())),
                    None => self.emit(
                        &Option::<()>::None,
                        &OperationStatus::unchanged(
                            "Maintenance task not found for status update.".to_string(),
                        ),
                    ),
                }
            }
        }
    }

    pub async fn handle_import_command(&self, command: ImportCommands) -> Result<()> {
        match command {
            ImportCommands::Aircraft(args) => {
                debug!("Importing aircraft from {}", args.file.display());
                let reloaded = self.coordinator.import_aircraft_file(&args.into()).await?;
                let status = if reloaded.outcome.accepted > 0 {
                    OperationStatus::changed(reloaded.message.clone())
                } else {
                    OperationStatus::unchanged(reloaded.message.clone())
                };
                self.emit_reloaded(&reloaded, &format!("{status}\n{}", reloaded.outcome))
            }
            ImportCommands::Tasks(args) => {
                debug!("Importing maintenance tasks from {}", args.file.display());
                let report = self.coordinator.import_task_file(&args.into()).await?;
                self.emit(&report, &report)
            }
        }
    }

    /// Prints the KPI dashboard.
    pub async fn show_dashboard(&self) -> Result<()> {
        let kpi = self.coordinator.kpi_snapshot().await?;
        self.emit(&kpi, &kpi)
    }

    /// Prints the KPI dashboard followed by per-aircraft task counts.
    pub async fn show_stats(&self) -> Result<()> {
        let kpi = self.coordinator.kpi_snapshot().await?;
        let summaries = self.coordinator.aircraft_summaries().await?;

        let markdown = format!(
            "{kpi}\n## Aircraft\n\n{}",
            AircraftSummaries(summaries.clone())
        );
        self.emit(
            &serde_json::json!({ "kpi": kpi, "aircraft": summaries }),
            &markdown,
        )
    }
}
