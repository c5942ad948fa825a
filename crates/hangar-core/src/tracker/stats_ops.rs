//! Statistics operations for the Tracker.

use jiff::civil::Date;

use super::Tracker;
use crate::{
    error::Result,
    models::{AircraftDetail, AircraftTaskSummary, KpiSnapshot},
    params::Id,
    stats,
};

impl Tracker {
    /// Computes the dashboard KPIs as of `today`.
    pub async fn kpi_snapshot(&self, today: Date) -> Result<KpiSnapshot> {
        self.with_database(move |db| {
            let total_aircraft = db.count_aircraft()?;
            let tasks = db.list_tasks()?;
            Ok(stats::kpi_snapshot(total_aircraft, &tasks, today))
        })
        .await
    }

    /// Task counts for every aircraft, ordered by aircraft ID.
    pub async fn aircraft_summaries(&self) -> Result<Vec<AircraftTaskSummary>> {
        self.with_database(|db| {
            let aircraft = db.list_aircraft()?;
            let tasks = db.list_tasks()?;
            Ok(stats::aircraft_summaries(&aircraft, &tasks))
        })
        .await
    }

    /// An aircraft with its task counts and tasks, or `None` if it does not
    /// exist.
    pub async fn aircraft_detail(&self, params: &Id) -> Result<Option<AircraftDetail>> {
        let id = params.id;

        self.with_database(move |db| {
            let Some(aircraft) = db.get_aircraft(id)? else {
                return Ok(None);
            };
            let tasks = db.list_tasks_for_aircraft(id)?;
            let summary = stats::aircraft_summary(&aircraft, &tasks);
            Ok(Some(AircraftDetail { summary, tasks }))
        })
        .await
    }
}
