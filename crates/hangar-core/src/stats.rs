//! Dashboard figures derived from stored aircraft and tasks.
//!
//! Everything here is a pure function of its inputs. Callers pass in the
//! current date so that "this period" is under their control.

use jiff::civil::Date;

use crate::models::{Aircraft, AircraftTaskSummary, KpiSnapshot, MaintenanceTask, TaskStatus};

/// Computes the dashboard KPIs.
///
/// `completed_this_period` counts completed tasks whose *due date* falls in
/// the month of `today`. Tasks carry no completion date, so the due date
/// stands in for it.
///
/// ```rust
/// use hangar_core::{models::{MaintenanceTask, TaskStatus}, stats::kpi_snapshot};
/// use jiff::civil::date;
///
/// let task = |id, due, status| MaintenanceTask {
///     id,
///     aircraft_id: 1,
///     aircraft_display: "A320 (N1)".to_string(),
///     description: "Inspection".to_string(),
///     due_date: due,
///     status,
/// };
/// let tasks = vec![
///     task(1, date(2024, 5, 3), TaskStatus::Completed),
///     task(2, date(2024, 4, 30), TaskStatus::Completed),
///     task(3, date(2024, 5, 20), TaskStatus::Pending),
/// ];
///
/// let kpi = kpi_snapshot(2, &tasks, date(2024, 5, 15));
/// assert_eq!(kpi.total_aircraft, 2);
/// assert_eq!(kpi.pending_task_count, 1);
/// assert_eq!(kpi.completed_this_period, 1);
/// ```
pub fn kpi_snapshot(total_aircraft: usize, tasks: &[MaintenanceTask], today: Date) -> KpiSnapshot {
    let pending_task_count = tasks.iter().filter(|task| task.is_pending()).count();
    let completed_this_period = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Completed && task.is_due_in_month_of(today))
        .count();

    KpiSnapshot {
        total_aircraft,
        pending_task_count,
        completed_this_period,
    }
}

/// Task counts for one aircraft. Tasks of other aircraft are ignored.
pub fn aircraft_summary(aircraft: &Aircraft, tasks: &[MaintenanceTask]) -> AircraftTaskSummary {
    let mut summary = AircraftTaskSummary {
        aircraft: aircraft.clone(),
        total_tasks: 0,
        pending_tasks: 0,
        completed_tasks: 0,
    };

    for task in tasks.iter().filter(|task| task.aircraft_id == aircraft.id) {
        summary.total_tasks += 1;
        match task.status {
            TaskStatus::Pending => summary.pending_tasks += 1,
            TaskStatus::Completed => summary.completed_tasks += 1,
        }
    }

    summary
}

/// Task counts for every aircraft, in the order of `aircraft`.
pub fn aircraft_summaries(
    aircraft: &[Aircraft],
    tasks: &[MaintenanceTask],
) -> Vec<AircraftTaskSummary> {
    aircraft
        .iter()
        .map(|a| aircraft_summary(a, tasks))
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn aircraft(id: u64, tail_number: &str) -> Aircraft {
        Aircraft {
            id,
            model: "Cessna 172".to_string(),
            tail_number: tail_number.to_string(),
        }
    }

    fn task(id: u64, aircraft_id: u64, due_date: Date, status: TaskStatus) -> MaintenanceTask {
        MaintenanceTask {
            id,
            aircraft_id,
            aircraft_display: String::new(),
            description: format!("Task {id}"),
            due_date,
            status,
        }
    }

    #[test]
    fn test_empty_store_has_zero_kpis() {
        let kpi = kpi_snapshot(0, &[], date(2024, 1, 1));
        assert_eq!(kpi, KpiSnapshot::default());
    }

    #[test]
    fn test_completed_this_period_matches_year_and_month() {
        let today = date(2024, 5, 15);
        let tasks = vec![
            task(1, 1, date(2024, 5, 1), TaskStatus::Completed),
            task(2, 1, date(2024, 5, 31), TaskStatus::Completed),
            task(3, 1, date(2023, 5, 10), TaskStatus::Completed),
            task(4, 1, date(2024, 6, 1), TaskStatus::Completed),
            task(5, 1, date(2024, 5, 2), TaskStatus::Pending),
        ];

        let kpi = kpi_snapshot(1, &tasks, today);

        assert_eq!(kpi.completed_this_period, 2);
        assert_eq!(kpi.pending_task_count, 1);
    }

    #[test]
    fn test_overdue_pending_tasks_still_count() {
        let tasks = vec![task(1, 1, date(2020, 1, 1), TaskStatus::Pending)];
        assert_eq!(kpi_snapshot(1, &tasks, date(2024, 5, 15)).pending_task_count, 1);
    }

    #[test]
    fn test_aircraft_summaries_split_by_aircraft() {
        let fleet = vec![aircraft(1, "N1"), aircraft(2, "N2"), aircraft(3, "N3")];
        let tasks = vec![
            task(1, 1, date(2024, 5, 1), TaskStatus::Pending),
            task(2, 1, date(2024, 5, 2), TaskStatus::Completed),
            task(3, 2, date(2024, 5, 3), TaskStatus::Completed),
        ];

        let summaries = aircraft_summaries(&fleet, &tasks);

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].total_tasks, 2);
        assert_eq!(summaries[0].pending_tasks, 1);
        assert_eq!(summaries[0].completed_tasks, 1);
        assert_eq!(summaries[1].total_tasks, 1);
        assert_eq!(summaries[1].completed_tasks, 1);
        assert_eq!(summaries[2].total_tasks, 0);
        assert_eq!(summaries[2].aircraft.tail_number, "N3");
    }
}
