//! Bulk import operations for the Tracker.
//!
//! A whole file is merged inside one blocking task over one connection.

use super::Tracker;
use crate::{
    error::Result,
    import::{self, ImportReport},
    params::ImportFile,
};

impl Tracker {
    /// Imports aircraft from a `.csv`, `.xml` or `.xlsx` file, skipping tail
    /// numbers that are already registered.
    pub async fn import_aircraft(&self, params: &ImportFile) -> Result<ImportReport> {
        let path = params.path.clone();
        self.with_database(move |db| import::import_aircraft(db, &path))
            .await
    }

    /// Imports maintenance tasks from a `.csv`, `.xml` or `.xlsx` file.
    pub async fn import_tasks(&self, params: &ImportFile) -> Result<ImportReport> {
        let path = params.path.clone();
        self.with_database(move |db| import::import_tasks(db, &path))
            .await
    }
}
