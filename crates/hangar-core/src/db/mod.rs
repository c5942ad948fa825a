//! Store access for aircraft and maintenance tasks.
//!
//! [`Database`] owns a single SQLite connection. Callers open one per
//! request and drop it when the request is done, so the connection is
//! released on every exit path. Each entity has its own query module and is
//! written only from there:
//!
//! - [`aircraft_queries`]: the aircraft repository (tail number uniqueness)
//! - [`task_queries`]: the maintenance task repository (aircraft reference,
//!   status vocabulary)

use std::path::Path;

use log::debug;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod aircraft_queries;
pub mod schema;
pub mod task_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Opening store at {}", path.as_ref().display());
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database with the schema applied.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
