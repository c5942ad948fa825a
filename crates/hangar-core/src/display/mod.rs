//! Display formatting for records, collections and operation results.
//!
//! Domain records implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and operation outcomes are wrapped in newtypes so that each
//! context gets its own layout. All output is markdown, which the CLI
//! renders through `termimad` or prints as-is with `--no-color`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers and    │    │   Formatted     │
//! │ (Aircraft, Task)│───▶│ Result Types    │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`AircraftList`], [`TaskList`], [`AircraftSummaries`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`], [`DeleteResult`]
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: due date formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use hangar_core::{display::CreateResult, models::Aircraft};
//!
//! let aircraft = Aircraft {
//!     id: 1,
//!     model: "Airbus A320".to_string(),
//!     tail_number: "D-AIPX".to_string(),
//! };
//!
//! let output = CreateResult::new(aircraft).to_string();
//! assert!(output.contains("Created aircraft with ID: 1"));
//! ```
//!
//! ```rust
//! use hangar_core::display::OperationStatus;
//!
//! let status = OperationStatus::unchanged("Aircraft not found for deletion.".to_string());
//! assert!(status.to_string().starts_with("Nothing changed:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{AircraftList, AircraftSummaries, TaskList};
pub use datetime::DueDate;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;

/// Escapes a value for use inside a markdown table cell.
pub(crate) fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
