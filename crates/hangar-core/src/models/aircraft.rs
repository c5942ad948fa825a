//! Aircraft model definition.

use serde::{Deserialize, Serialize};

/// A registered aircraft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Aircraft {
    /// Store-assigned identifier, never changes after creation
    pub id: u64,

    /// Manufacturer model name, e.g. "Boeing 747"
    pub model: String,

    /// Registration mark, unique across the fleet
    pub tail_number: String,
}

impl Aircraft {
    /// Human readable name used wherever a task refers to its aircraft,
    /// e.g. `Boeing 747 (N373BA)`.
    pub fn display_name(&self) -> String {
        display_name(&self.model, &self.tail_number)
    }
}

/// Joins a model and a tail number into the display form shown next to
/// maintenance tasks.
pub(crate) fn display_name(model: &str, tail_number: &str) -> String {
    format!("{model} ({tail_number})")
}
