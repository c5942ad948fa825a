//! Derived fleet statistics.

use serde::{Deserialize, Serialize};

use super::{Aircraft, MaintenanceTask};

/// Point-in-time dashboard figures derived from the store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct KpiSnapshot {
    /// Number of registered aircraft
    pub total_aircraft: usize,
    /// Number of tasks still pending
    pub pending_task_count: usize,
    /// Completed tasks whose due date falls in the current month
    pub completed_this_period: usize,
}

/// Task counts for a single aircraft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AircraftTaskSummary {
    /// The aircraft the counts belong to
    pub aircraft: Aircraft,
    /// All tasks scheduled for the aircraft
    pub total_tasks: usize,
    /// Tasks not yet completed
    pub pending_tasks: usize,
    /// Tasks marked completed
    pub completed_tasks: usize,
}

/// An aircraft with its task counts and its tasks, as shown by `show`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AircraftDetail {
    /// Task counts for the aircraft
    pub summary: AircraftTaskSummary,
    /// The aircraft's tasks, earliest due date first
    pub tasks: Vec<MaintenanceTask>,
}
