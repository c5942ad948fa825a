//! Outcome of a single import call.

use serde::{Deserialize, Serialize};

use super::ImportFormat;

/// A record that was skipped because it could not be used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Line (CSV), row (Excel) or element index (XML), 1-based
    pub position: usize,
    /// Why the record was skipped
    pub reason: String,
}

/// Counts and rejections collected while merging one file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportReport {
    /// Encoding of the imported file
    pub format: ImportFormat,
    /// Records written to the store
    pub accepted: usize,
    /// Records whose tail number was already known
    pub duplicates: usize,
    /// Records that could not be used, in file order
    pub rejected: Vec<RejectedRecord>,
}

impl ImportReport {
    /// Creates an empty report for a file of the given format.
    pub fn new(format: ImportFormat) -> Self {
        Self {
            format,
            accepted: 0,
            duplicates: 0,
            rejected: Vec::new(),
        }
    }

    /// Records that were read but not written.
    pub fn skipped(&self) -> usize {
        self.duplicates + self.rejected.len()
    }

    pub(crate) fn reject(&mut self, position: usize, reason: impl Into<String>) {
        self.rejected.push(RejectedRecord {
            position,
            reason: reason.into(),
        });
    }
}
