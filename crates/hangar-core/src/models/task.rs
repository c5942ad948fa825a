//! Maintenance task model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// The only accepted spelling of a due date.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a due date written as `YYYY-MM-DD`.
///
/// Stricter than `Date::from_str`: ISO basic form (`20240503`) and
/// datetimes (`2024-05-03T10:00`) are rejected instead of truncated.
///
/// ```rust
/// use hangar_core::models::parse_due_date;
/// use jiff::civil::date;
///
/// assert_eq!(parse_due_date("2024-05-03").ok(), Some(date(2024, 5, 3)));
/// assert!(parse_due_date("20240503").is_err());
/// assert!(parse_due_date("2024-05-03T10:00").is_err());
/// ```
pub fn parse_due_date(raw: &str) -> Result<Date, jiff::Error> {
    Date::strptime(DUE_DATE_FORMAT, raw)
}

/// A scheduled maintenance task for one aircraft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MaintenanceTask {
    /// Unique identifier for the task
    pub id: u64,

    /// ID of the aircraft the task belongs to
    pub aircraft_id: u64,

    /// Model and tail number of the referenced aircraft, resolved by join
    /// when the task is read. Never persisted.
    pub aircraft_display: String,

    /// What has to be done
    pub description: String,

    /// Calendar date the task is due
    pub due_date: Date,

    /// Current status of the task
    pub status: TaskStatus,
}

impl MaintenanceTask {
    /// Whether the task is still open.
    pub fn is_pending(&self) -> bool {
        self.status == TaskStatus::Pending
    }

    /// Whether the task is due in the same calendar month and year as `today`.
    pub fn is_due_in_month_of(&self, today: Date) -> bool {
        self.due_date.year() == today.year() && self.due_date.month() == today.month()
    }
}
