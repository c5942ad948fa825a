//! Presentation boundary.
//!
//! The [`Coordinator`] is what an interface layer talks to. It forwards each
//! request to the [`Tracker`] and turns every error into a [`Failure`]: a
//! kind plus a user-facing message. No `TrackerError` or store error crosses
//! this boundary.
//!
//! Calls that change the set of aircraft reload the full aircraft list
//! afterwards and hand it back in a [`Reloaded`], so a caller showing the
//! fleet never works from a stale copy. The coordinator keeps no selection
//! state; created records carry their IDs.
//!
//! ```rust,no_run
//! use hangar_core::{coordinator::Coordinator, params::CreateAircraft, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new().build().await?;
//! let coordinator = Coordinator::new(tracker);
//!
//! match coordinator
//!     .create_aircraft(&CreateAircraft {
//!         model: "Cessna 172".to_string(),
//!         tail_number: "N12345".to_string(),
//!     })
//!     .await
//! {
//!     Ok(reloaded) => println!("{} ({} aircraft)", reloaded.message, reloaded.aircraft.len()),
//!     Err(failure) => eprintln!("Error: {failure}"),
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use jiff::{civil::Date, Zoned};
use log::error;
use serde::{Deserialize, Serialize};

use crate::{
    error::TrackerError,
    import::ImportReport,
    models::{Aircraft, AircraftDetail, AircraftTaskSummary, KpiSnapshot, MaintenanceTask},
    params::{CreateAircraft, CreateTask, Id, ImportFile, UpdateAircraft, UpdateTaskStatus},
    Tracker,
};

/// Category of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The store could not be reached or a statement failed
    StoreUnavailable,
    /// A value was rejected (empty or duplicate tail number, empty description)
    Validation,
    /// A task referenced an aircraft that does not exist
    Referential,
    /// An import record could not be interpreted
    MalformedRecord,
    /// A file could not be read
    FileSystem,
    /// An import file could not be parsed
    Parse,
    /// An import file has an unknown suffix
    UnsupportedFormat,
    /// The tracker is misconfigured or a background task failed
    Configuration,
}

/// Structured description of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Failure {}

impl From<TrackerError> for Failure {
    fn from(error: TrackerError) -> Self {
        let kind = match &error {
            TrackerError::StoreUnavailable { .. } => FailureKind::StoreUnavailable,
            TrackerError::Validation { .. } => FailureKind::Validation,
            TrackerError::Referential { .. } => FailureKind::Referential,
            TrackerError::MalformedRecord { .. } => FailureKind::MalformedRecord,
            TrackerError::FileSystem { .. } => FailureKind::FileSystem,
            TrackerError::Parse { .. } => FailureKind::Parse,
            TrackerError::UnsupportedFormat { .. } => FailureKind::UnsupportedFormat,
            TrackerError::XdgDirectory(_) | TrackerError::Configuration { .. } => {
                FailureKind::Configuration
            }
        };

        let message = match &error {
            TrackerError::Validation { reason, .. } => reason.clone(),
            TrackerError::StoreUnavailable { message, source } => {
                error!("{message}: {source}");
                format!("{message}: {source}")
            }
            other => other.to_string(),
        };

        Failure { kind, message }
    }
}

/// Result of a request at the presentation boundary.
pub type Outcome<T> = Result<T, Failure>;

/// Result of a call that changed the fleet, with the fleet reloaded after
/// the change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reloaded<T> {
    /// What the call produced
    pub outcome: T,
    /// User-facing confirmation, also set when nothing was changed
    pub message: String,
    /// Every aircraft, ordered by ID, read after the change
    pub aircraft: Vec<Aircraft>,
}

/// Presentation-facing entry point for all tracker operations.
#[derive(Debug, Clone)]
pub struct Coordinator {
    tracker: Tracker,
}

impl Coordinator {
    /// Wraps a configured tracker.
    pub fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }

    /// The wrapped tracker.
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    async fn reloaded<T>(&self, outcome: T, message: impl Into<String>) -> Outcome<Reloaded<T>> {
        let aircraft = self.tracker.list_aircraft().await?;
        Ok(Reloaded {
            outcome,
            message: message.into(),
            aircraft,
        })
    }

    /// Every aircraft, ordered by ID.
    pub async fn list_aircraft(&self) -> Outcome<Vec<Aircraft>> {
        Ok(self.tracker.list_aircraft().await?)
    }

    /// Registers an aircraft and reloads the fleet.
    pub async fn create_aircraft(&self, params: &CreateAircraft) -> Outcome<Reloaded<Aircraft>> {
        let aircraft = self.tracker.create_aircraft(params).await?;
        self.reloaded(aircraft, "Aircraft added successfully.")
            .await
    }

    /// Changes an aircraft and reloads the fleet.
    ///
    /// The outcome is the aircraft as stored after the change, or `None`
    /// when no aircraft has the ID. A missing aircraft is reported in the
    /// message, not as a failure.
    pub async fn update_aircraft(
        &self,
        params: &UpdateAircraft,
    ) -> Outcome<Reloaded<Option<Aircraft>>> {
        let updated = self.tracker.update_aircraft(params).await?;
        let mut reloaded = self
            .reloaded(None, "Aircraft not found for update.")
            .await?;

        if updated > 0 {
            reloaded.outcome = reloaded.aircraft.iter().find(|a| a.id == params.id).cloned();
            reloaded.message = "Aircraft updated successfully.".to_string();
        }

        Ok(reloaded)
    }

    /// Deletes an aircraft and its tasks, then reloads the fleet.
    ///
    /// The outcome is the aircraft as it was before deletion, or `None`
    /// when no aircraft has the ID.
    pub async fn delete_aircraft(&self, params: &Id) -> Outcome<Reloaded<Option<Aircraft>>> {
        let existing = self.tracker.get_aircraft(params).await?;

        let deleted = match existing {
            Some(aircraft) => {
                let rows = self.tracker.delete_aircraft(params).await?;
                (rows > 0).then_some(aircraft)
            }
            None => None,
        };

        let message = if deleted.is_some() {
            "Aircraft deleted successfully."
        } else {
            "Aircraft not found for deletion."
        };

        self.reloaded(deleted, message).await
    }

    /// An aircraft with its task counts and tasks.
    pub async fn show_aircraft(&self, params: &Id) -> Outcome<Option<AircraftDetail>> {
        Ok(self.tracker.aircraft_detail(params).await?)
    }

    /// Every task, earliest due date first.
    pub async fn list_tasks(&self) -> Outcome<Vec<MaintenanceTask>> {
        Ok(self.tracker.list_tasks().await?)
    }

    /// Schedules a pending task.
    pub async fn create_task(&self, params: &CreateTask) -> Outcome<MaintenanceTask> {
        Ok(self.tracker.create_task(params).await?)
    }

    /// Sets the status of a task and returns the task as stored afterwards,
    /// or `None` when no task has the ID.
    pub async fn update_task_status(
        &self,
        params: &UpdateTaskStatus,
    ) -> Outcome<Option<MaintenanceTask>> {
        if self.tracker.update_task_status(params).await? == 0 {
            return Ok(None);
        }

        Ok(self.tracker.get_task(&Id { id: params.id }).await?)
    }

    /// Imports aircraft from a file and reloads the fleet.
    pub async fn import_aircraft_file(
        &self,
        params: &ImportFile,
    ) -> Outcome<Reloaded<ImportReport>> {
        let report = self.tracker.import_aircraft(params).await?;
        let message = format!(
            "Imported {} aircraft from {} file ({} skipped).",
            report.accepted,
            report.format,
            report.skipped()
        );
        self.reloaded(report, message).await
    }

    /// Imports maintenance tasks from a file.
    pub async fn import_task_file(&self, params: &ImportFile) -> Outcome<ImportReport> {
        Ok(self.tracker.import_tasks(params).await?)
    }

    /// Dashboard KPIs as of today in the system time zone.
    pub async fn kpi_snapshot(&self) -> Outcome<KpiSnapshot> {
        self.kpi_snapshot_at(Zoned::now().date()).await
    }

    /// Dashboard KPIs as of `today`.
    pub async fn kpi_snapshot_at(&self, today: Date) -> Outcome<KpiSnapshot> {
        Ok(self.tracker.kpi_snapshot(today).await?)
    }

    /// Task counts for every aircraft.
    pub async fn aircraft_summaries(&self) -> Outcome<Vec<AircraftTaskSummary>> {
        Ok(self.tracker.aircraft_summaries().await?)
    }
}
