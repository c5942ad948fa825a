//! Core library for the Hangar aircraft maintenance tracker.
//!
//! The crate keeps aircraft and their maintenance tasks in a SQLite store,
//! merges bulk imports from CSV, XML and Excel files without creating
//! duplicate aircraft, and derives the dashboard figures from what is
//! stored.
//!
//! # Layers
//!
//! - [`db`]: the store. [`Database`] owns one connection; the aircraft and
//!   task repositories are the only writers of their tables.
//! - [`import`]: file readers and the merge of imported records through the
//!   repositories.
//! - [`stats`]: pure KPI and per-aircraft summary functions.
//! - [`tracker`]: the async [`Tracker`] facade, one blocking task and one
//!   connection per call.
//! - [`coordinator`]: the presentation boundary, which maps every error to a
//!   [`Failure`] and reloads the fleet after aircraft changes.
//! - [`display`]: markdown `Display` implementations and wrappers.
//!
//! # Quick Start
//!
//! ```rust
//! use hangar_core::{
//!     params::{CreateAircraft, CreateTask},
//!     Coordinator, TrackerBuilder,
//! };
//! use jiff::civil::date;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::tempdir()?;
//! # let path = dir.path().join("hangar.db");
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some(&path))
//!     .build()
//!     .await?;
//! let coordinator = Coordinator::new(tracker);
//!
//! let created = coordinator
//!     .create_aircraft(&CreateAircraft {
//!         model: "Cessna 172".to_string(),
//!         tail_number: "N12345".to_string(),
//!     })
//!     .await?;
//!
//! coordinator
//!     .create_task(&CreateTask {
//!         aircraft_id: created.outcome.id,
//!         description: "Annual inspection".to_string(),
//!         due_date: date(2025, 3, 1),
//!     })
//!     .await?;
//!
//! let kpi = coordinator.kpi_snapshot_at(date(2025, 3, 15)).await?;
//! assert_eq!(kpi.total_aircraft, 1);
//! assert_eq!(kpi.pending_task_count, 1);
//! # Ok(())
//! # }
//! ```

pub mod coordinator;
pub mod db;
pub mod display;
pub mod error;
pub mod import;
pub mod models;
pub mod params;
pub mod stats;
pub mod tracker;

// Re-export commonly used types
pub use coordinator::{Coordinator, Failure, FailureKind, Outcome, Reloaded};
pub use db::Database;
pub use display::{
    AircraftList, AircraftSummaries, CreateResult, DeleteResult, OperationStatus, TaskList,
    UpdateResult,
};
pub use error::{Result, TrackerError};
pub use import::{ImportFormat, ImportReport, RejectedRecord};
pub use models::{
    Aircraft, AircraftDetail, AircraftTaskSummary, KpiSnapshot, MaintenanceTask, TaskStatus,
};
pub use params::{CreateAircraft, CreateTask, Id, ImportFile, UpdateAircraft, UpdateTaskStatus};
pub use tracker::{Tracker, TrackerBuilder};
