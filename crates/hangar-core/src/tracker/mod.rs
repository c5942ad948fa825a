//! Async facade over the store.
//!
//! [`Tracker`] is the entry point for every operation on aircraft, tasks,
//! imports and statistics. It holds only the database path: each call opens
//! its own [`Database`] inside a blocking task, runs one repository
//! operation (or a short fixed sequence of them) and drops the connection
//! before returning.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Coordinator   │───▶│     Tracker     │───▶│    Database     │
//! │ (failures, msgs)│    │ (spawn_blocking)│    │ (repositories)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use hangar_core::{params::CreateAircraft, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/hangar.db"))
//!     .build()
//!     .await?;
//!
//! let aircraft = tracker
//!     .create_aircraft(&CreateAircraft {
//!         model: "Boeing 737-800".to_string(),
//!         tail_number: "EI-DCL".to_string(),
//!     })
//!     .await?;
//! println!("Registered {}", aircraft.display_name());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, TrackerError},
};

pub mod aircraft_ops;
pub mod builder;
pub mod import_ops;
pub mod stats_ops;
pub mod task_ops;


pub use builder::TrackerBuilder;

/// Main tracker interface for aircraft and maintenance tasks.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    /// Creates a new tracker with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the database file this tracker works on.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `operation` against a freshly opened connection on the blocking
    /// thread pool.
    async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
