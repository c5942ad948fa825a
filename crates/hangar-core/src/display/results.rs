//! Result wrapper types for displaying operation outcomes.
//!
//! These format the results of create, update and delete operations with
//! consistent messaging followed by the affected record.

use std::fmt;

use crate::models::{Aircraft, MaintenanceTask};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use hangar_core::{display::CreateResult, models::{MaintenanceTask, TaskStatus}};
/// use jiff::civil::date;
///
/// let task = MaintenanceTask {
///     id: 12,
///     aircraft_id: 1,
///     aircraft_display: "Cessna 172 (N12345)".to_string(),
///     description: "Oil change".to_string(),
///     due_date: date(2024, 9, 1),
///     status: TaskStatus::Pending,
/// };
///
/// let output = CreateResult::new(task).to_string();
/// assert!(output.starts_with("Created maintenance task with ID: 12"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Aircraft> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created aircraft with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<MaintenanceTask> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created maintenance task with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Holds the record as stored after the update.
pub struct UpdateResult<T> {
    pub resource: T,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for UpdateResult<Aircraft> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated aircraft with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<MaintenanceTask> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Marked maintenance task {} as {}",
            self.resource.id, self.resource.status
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
///
/// Holds the record as it was before deletion.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Aircraft> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted aircraft '{}' (ID: {}) and its maintenance tasks",
            self.resource.display_name(),
            self.resource.id
        )
    }
}
