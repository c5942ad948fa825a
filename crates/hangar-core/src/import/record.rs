//! Format-independent view of import records.

use std::path::Path;

use super::{delimited, markup, spreadsheet, ImportFormat};
use crate::error::Result;

/// Shape of one kind of record across all three encodings.
///
/// For delimited text and spreadsheets the fields are columns in this
/// order; for XML `element` names the record element and each field names a
/// child element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    /// XML element that holds one record
    pub element: &'static str,
    /// Field names in column order
    pub fields: &'static [&'static str],
}

/// `model, tailNumber`
pub const AIRCRAFT_LAYOUT: RecordLayout = RecordLayout {
    element: "aircraft",
    fields: &["model", "tailNumber"],
};

/// `aircraftId, description, dueDate, status`
pub const TASK_LAYOUT: RecordLayout = RecordLayout {
    element: "task",
    fields: &["aircraftId", "description", "dueDate", "status"],
};

/// One record read from an import file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A record with exactly one value per layout field, untrimmed
    Fields { position: usize, values: Vec<String> },
    /// A record that does not fit the layout
    Malformed { position: usize, reason: String },
}

/// Lazily produced rows. An `Err` item ends the import.
pub type Rows = Box<dyn Iterator<Item = Result<Row>>>;

/// Opens `path` as `format` and yields its records shaped by `layout`.
///
/// Header lines and header rows are consumed here and never yielded.
pub fn read_rows(format: ImportFormat, path: &Path, layout: RecordLayout) -> Result<Rows> {
    match format {
        ImportFormat::Csv => delimited::read_rows(path, layout),
        ImportFormat::Xml => markup::read_rows(path, layout),
        ImportFormat::Xlsx => spreadsheet::read_rows(path, layout),
    }
}
