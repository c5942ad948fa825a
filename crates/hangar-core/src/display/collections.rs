//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper handles the empty case with a single "No ... found." line.

use std::fmt;

use super::{table_cell, DueDate};
use crate::models::{Aircraft, AircraftTaskSummary, MaintenanceTask};

/// Implements the accessors shared by all collection wrappers.
macro_rules! collection_wrapper {
    ($wrapper:ident, $item:ty, $noun:literal) => {
        impl $wrapper {
            #[doc = concat!("Check if the collection of ", $noun, " is empty.")]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            #[doc = concat!("Get the number of ", $noun, " in the collection.")]
            pub fn len(&self) -> usize {
                self.0.len()
            }
        }

        impl<'a> IntoIterator for &'a $wrapper {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

/// Newtype wrapper for displaying the fleet as a markdown table.
///
/// # Examples
///
/// ```rust
/// use hangar_core::{display::AircraftList, models::Aircraft};
///
/// let fleet = AircraftList(vec![Aircraft {
///     id: 1,
///     model: "Cessna 172".to_string(),
///     tail_number: "N12345".to_string(),
/// }]);
///
/// let output = fleet.to_string();
/// assert!(output.contains("| 1 | Cessna 172 | N12345 |"));
/// assert_eq!(AircraftList(vec![]).to_string(), "No aircraft found.\n");
/// ```
pub struct AircraftList(pub Vec<Aircraft>);

collection_wrapper!(AircraftList, Aircraft, "aircraft");

impl fmt::Display for AircraftList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No aircraft found.");
        }

        writeln!(f, "| ID | Model | Tail number |")?;
        writeln!(f, "|---:|:---|:---|")?;
        for aircraft in self {
            writeln!(
                f,
                "| {} | {} | {} |",
                aircraft.id,
                table_cell(&aircraft.model),
                table_cell(&aircraft.tail_number)
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying maintenance tasks as a markdown table,
/// in the order given (the store returns them by due date).
///
/// # Examples
///
/// ```rust
/// use hangar_core::{display::TaskList, models::{MaintenanceTask, TaskStatus}};
/// use jiff::civil::date;
///
/// let tasks = TaskList(vec![MaintenanceTask {
///     id: 4,
///     aircraft_id: 1,
///     aircraft_display: "Cessna 172 (N12345)".to_string(),
///     description: "100-hour inspection".to_string(),
///     due_date: date(2024, 5, 3),
///     status: TaskStatus::Pending,
/// }]);
///
/// assert!(tasks.to_string().contains("100-hour inspection"));
/// ```
pub struct TaskList(pub Vec<MaintenanceTask>);

collection_wrapper!(TaskList, MaintenanceTask, "tasks");

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No maintenance tasks found.");
        }

        writeln!(f, "| ID | Aircraft | Description | Due | Status |")?;
        writeln!(f, "|---:|:---|:---|:---|:---|")?;
        for task in self {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                task.id,
                table_cell(&task.aircraft_display),
                table_cell(&task.description),
                DueDate(&task.due_date),
                task.status.with_icon()
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying per-aircraft task counts.
pub struct AircraftSummaries(pub Vec<AircraftTaskSummary>);

collection_wrapper!(AircraftSummaries, AircraftTaskSummary, "summaries");

impl fmt::Display for AircraftSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "No aircraft found.")
        } else {
            for summary in self {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}
