//! Parameter structures for tracker operations
//!
//! These structures carry request data from an interface layer (the CLI
//! today) into the core without any framework-specific derives. Interface
//! layers define their own argument types and convert into these with
//! `From` impls:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│   Coordinator   │
//! │  (clap derives) │    │ (minimal deps)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use std::path::PathBuf;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::TaskStatus;

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_aircraft and delete_aircraft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for registering a new aircraft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAircraft {
    /// Manufacturer model name
    pub model: String,
    /// Registration mark, must not be in use yet
    pub tail_number: String,
}

/// Parameters for changing an existing aircraft.
///
/// Both fields are replaced; the ID never changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAircraft {
    /// ID of the aircraft to change
    pub id: u64,
    /// New model name
    pub model: String,
    /// New tail number, must not belong to another aircraft
    pub tail_number: String,
}

/// Parameters for scheduling a maintenance task.
///
/// New tasks always start out as [`TaskStatus::Pending`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Aircraft the task is scheduled for
    pub aircraft_id: u64,
    /// What has to be done
    pub description: String,
    /// Calendar date the task is due
    pub due_date: Date,
}

/// Parameters for moving a task between statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTaskStatus {
    /// ID of the task to change
    pub id: u64,
    /// Status to set
    pub status: TaskStatus,
}

/// Parameters for importing records from a file.
///
/// The format is taken from the file suffix (`.csv`, `.xml`, `.xlsx`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportFile {
    /// Path of the file to import
    pub path: PathBuf,
}
