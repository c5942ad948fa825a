//! Data models for aircraft and maintenance tasks.
//!
//! This module contains the domain records kept in the store and the figures
//! derived from them. Display implementations live in
//! [`crate::display::models`] so that the records stay free of presentation
//! logic.
//!
//! # Examples
//!
//! ```rust
//! use hangar_core::models::{Aircraft, MaintenanceTask, TaskStatus};
//! use jiff::civil::date;
//!
//! let aircraft = Aircraft {
//!     id: 1,
//!     model: "Airbus A320".to_string(),
//!     tail_number: "D-AIPX".to_string(),
//! };
//!
//! let task = MaintenanceTask {
//!     id: 7,
//!     aircraft_id: aircraft.id,
//!     aircraft_display: aircraft.display_name(),
//!     description: "Replace brake pads".to_string(),
//!     due_date: date(2025, 6, 1),
//!     status: TaskStatus::Pending,
//! };
//! assert_eq!(task.aircraft_display, "Airbus A320 (D-AIPX)");
//! ```

pub mod aircraft;
pub mod status;
pub mod summary;
pub mod task;

#[cfg(test)]
mod tests;

pub use aircraft::Aircraft;
pub use status::TaskStatus;
pub use summary::{AircraftDetail, AircraftTaskSummary, KpiSnapshot};
pub use task::{parse_due_date, MaintenanceTask, DUE_DATE_FORMAT};
