//! Error types for the tracker library.

use std::path::PathBuf;

use rusqlite::ffi;
use thiserror::Error;

use crate::import::ImportFormat;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The store could not be opened or a statement failed
    #[error("Store unavailable: {message}")]
    StoreUnavailable {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Uniqueness or field-shape violation
    #[error("Invalid value for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// A task referenced an aircraft that does not exist
    #[error("Aircraft with ID {aircraft_id} does not exist")]
    Referential { aircraft_id: u64 },
    /// A single import record could not be interpreted
    #[error("Malformed record at position {position}: {reason}")]
    MalformedRecord { position: usize, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The import file structure could not be parsed at all
    #[error("Failed to parse {format} file: {message}")]
    Parse {
        format: ImportFormat,
        message: String,
    },
    /// The import file suffix is not one of the supported formats
    #[error("Unsupported import file '{path}': expected a .csv, .xml or .xlsx file")]
    UnsupportedFormat { path: PathBuf },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating store errors with optional context.
pub struct StoreErrorBuilder {
    message: String,
}

impl StoreErrorBuilder {
    /// Create a new store error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TrackerError {
        TrackerError::StoreUnavailable {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating validation errors.
pub struct ValidationBuilder {
    field: String,
}

impl ValidationBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for store errors.
    pub fn store(message: impl Into<String>) -> StoreErrorBuilder {
        StoreErrorBuilder::new(message)
    }

    /// Creates a builder for validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationBuilder {
        ValidationBuilder::new(field)
    }

    /// True for errors that reject a single import record rather than the
    /// whole batch.
    pub fn is_record_level(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::Referential { .. } | Self::MalformedRecord { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::store(message).with_source(e))
    }
}

/// Returns true when `error` is a SQLite constraint violation with the given
/// extended result code (e.g. `SQLITE_CONSTRAINT_UNIQUE`).
pub(crate) fn is_constraint(error: &rusqlite::Error, extended_code: i32) -> bool {
    match error {
        rusqlite::Error::SqliteFailure(failure, _) => {
            failure.code == rusqlite::ErrorCode::ConstraintViolation
                && failure.extended_code == extended_code
        }
        _ => false,
    }
}

/// Unique constraint violation (tail number already taken).
pub(crate) fn is_unique_violation(error: &rusqlite::Error) -> bool {
    is_constraint(error, ffi::SQLITE_CONSTRAINT_UNIQUE)
}

/// Foreign key violation (aircraft id does not exist).
pub(crate) fn is_foreign_key_violation(error: &rusqlite::Error) -> bool {
    is_constraint(error, ffi::SQLITE_CONSTRAINT_FOREIGNKEY)
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
