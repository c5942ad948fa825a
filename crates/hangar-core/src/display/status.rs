//! Status messages for operations that may leave the store untouched.

use std::fmt;

/// One-line outcome of an update, delete or import.
///
/// Update and delete of a missing record are not errors; they report that
/// nothing changed.
pub struct OperationStatus {
    pub message: String,
    pub changed: bool,
}

impl OperationStatus {
    /// Create a status for an operation that changed the store.
    pub fn changed(message: String) -> Self {
        Self {
            message,
            changed: true,
        }
    }

    /// Create a status for an operation that found nothing to change.
    pub fn unchanged(message: String) -> Self {
        Self {
            message,
            changed: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.changed { "Done:" } else { "Nothing changed:" };
        writeln!(f, "{label} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let changed = OperationStatus::changed("Aircraft updated successfully.".to_string());
        assert_eq!(changed.to_string(), "Done: Aircraft updated successfully.\n");

        let unchanged = OperationStatus::unchanged("Aircraft not found for update.".to_string());
        assert_eq!(
            unchanged.to_string(),
            "Nothing changed: Aircraft not found for update.\n"
        );
    }
}
