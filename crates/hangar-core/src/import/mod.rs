//! Bulk import of aircraft and maintenance tasks from external files.
//!
//! Three encodings are supported, chosen by file suffix and never by
//! content:
//!
//! | Suffix  | Format                    | Reader                   |
//! |---------|---------------------------|--------------------------|
//! | `.csv`  | delimited text, header    | [`csv`]                  |
//! | `.xml`  | repeating record elements | [`roxmltree`]            |
//! | `.xlsx` | first worksheet, header   | [`calamine`]             |
//!
//! Every reader turns the file into a sequence of [`Row`]s shaped by a
//! [`RecordLayout`]. The merge step ([`aircraft`], [`tasks`]) then writes
//! accepted records through the repository operations of
//! [`Database`](crate::db::Database); it never touches the tables directly.
//!
//! A record that does not fit the layout is skipped and listed in the
//! [`ImportReport`]. An unreadable file, an unparsable document, or a store
//! failure ends the import with an error. Records merged before a store
//! failure stay committed: every insert is its own transaction.

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};

pub mod aircraft;
mod delimited;
mod markup;
pub mod record;
pub mod report;
mod spreadsheet;
pub mod tasks;

#[cfg(test)]
mod tests;

pub use aircraft::import_aircraft;
pub use record::{read_rows, RecordLayout, Row, AIRCRAFT_LAYOUT, TASK_LAYOUT};
pub use report::{ImportReport, RejectedRecord};
pub use tasks::import_tasks;

/// File encodings the importer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    /// Comma separated text with a header line
    Csv,
    /// XML document with one element per record
    Xml,
    /// Excel workbook, first worksheet
    Xlsx,
}

impl ImportFormat {
    /// Picks the format from the (case-insensitive) file suffix.
    ///
    /// ```rust
    /// use hangar_core::import::ImportFormat;
    ///
    /// assert_eq!(ImportFormat::from_path("fleet.CSV").unwrap(), ImportFormat::Csv);
    /// assert_eq!(ImportFormat::from_path("tasks.xlsx").unwrap(), ImportFormat::Xlsx);
    /// assert!(ImportFormat::from_path("fleet.json").is_err());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(ImportFormat::Csv),
            Some("xml") => Ok(ImportFormat::Xml),
            Some("xlsx") => Ok(ImportFormat::Xlsx),
            _ => Err(TrackerError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Short upper-case name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportFormat::Csv => "CSV",
            ImportFormat::Xml => "XML",
            ImportFormat::Xlsx => "Excel",
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
