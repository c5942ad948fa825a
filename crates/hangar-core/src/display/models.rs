//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the records carry no
//! presentation logic. Output is markdown.

use std::fmt;

use super::{DueDate, TaskList};
use crate::{
    import::ImportReport,
    models::{
        Aircraft, AircraftDetail, AircraftTaskSummary, KpiSnapshot, MaintenanceTask, TaskStatus,
    },
};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.model)?;
        writeln!(f)?;
        writeln!(f, "- Tail number: {}", self.tail_number)
    }
}

impl fmt::Display for MaintenanceTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.description,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Aircraft: {}", self.aircraft_display)?;
        writeln!(f, "- Due: {}", DueDate(&self.due_date))
    }
}

impl fmt::Display for AircraftTaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_tasks > 0 {
            format!(" ({}/{})", self.completed_tasks, self.total_tasks)
        } else {
            String::new()
        };

        writeln!(
            f,
            "## {} (ID: {}){progress}",
            self.aircraft.display_name(),
            self.aircraft.id
        )?;
        writeln!(f)?;
        writeln!(f, "- **Tasks**: {}", self.total_tasks)?;
        writeln!(f, "- **Pending**: {}", self.pending_tasks)?;
        writeln!(f, "- **Completed**: {}", self.completed_tasks)?;
        writeln!(f)
    }
}

impl fmt::Display for AircraftDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary.aircraft)?;
        writeln!(f, "- Pending tasks: {}", self.summary.pending_tasks)?;
        writeln!(f, "- Completed tasks: {}", self.summary.completed_tasks)?;
        writeln!(f)?;

        if self.tasks.is_empty() {
            writeln!(f, "No maintenance tasks scheduled.")
        } else {
            writeln!(f, "## Maintenance tasks")?;
            writeln!(f)?;
            write!(f, "{}", TaskList(self.tasks.clone()))
        }
    }
}

impl fmt::Display for KpiSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Fleet dashboard")?;
        writeln!(f)?;
        writeln!(f, "- **Total aircraft**: {}", self.total_aircraft)?;
        writeln!(f, "- **Pending tasks**: {}", self.pending_task_count)?;
        writeln!(
            f,
            "- **Completed this month**: {}",
            self.completed_this_period
        )
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Imported {} records from {} file.",
            self.accepted, self.format
        )?;

        if self.duplicates > 0 {
            writeln!(f)?;
            writeln!(f, "- Already registered: {}", self.duplicates)?;
        }

        if !self.rejected.is_empty() {
            writeln!(f)?;
            writeln!(f, "Rejected records:")?;
            for rejected in &self.rejected {
                writeln!(f, "- {}: {}", rejected.position, rejected.reason)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::import::{ImportFormat, RejectedRecord};

    fn aircraft() -> Aircraft {
        Aircraft {
            id: 2,
            model: "Embraer E190".to_string(),
            tail_number: "PR-EAA".to_string(),
        }
    }

    fn task(status: TaskStatus) -> MaintenanceTask {
        MaintenanceTask {
            id: 9,
            aircraft_id: 2,
            aircraft_display: aircraft().display_name(),
            description: "Landing gear overhaul".to_string(),
            due_date: date(2024, 7, 1),
            status,
        }
    }

    #[test]
    fn test_task_display() {
        let output = task(TaskStatus::Completed).to_string();
        assert!(output.starts_with("### 9. Landing gear overhaul (✓ Completed)"));
        assert!(output.contains("- Aircraft: Embraer E190 (PR-EAA)"));
        assert!(output.contains("- Due: 2024-07-01"));
    }

    #[test]
    fn test_aircraft_detail_display() {
        let detail = AircraftDetail {
            summary: AircraftTaskSummary {
                aircraft: aircraft(),
                total_tasks: 1,
                pending_tasks: 1,
                completed_tasks: 0,
            },
            tasks: vec![task(TaskStatus::Pending)],
        };

        let output = detail.to_string();
        assert!(output.starts_with("# 2. Embraer E190"));
        assert!(output.contains("- Pending tasks: 1"));
        assert!(output.contains("Landing gear overhaul"));

        let empty = AircraftDetail {
            tasks: vec![],
            ..detail
        };
        assert!(empty.to_string().contains("No maintenance tasks scheduled."));
    }

    #[test]
    fn test_kpi_display() {
        let kpi = KpiSnapshot {
            total_aircraft: 3,
            pending_task_count: 5,
            completed_this_period: 1,
        };
        let output = kpi.to_string();
        assert!(output.contains("**Total aircraft**: 3"));
        assert!(output.contains("**Pending tasks**: 5"));
        assert!(output.contains("**Completed this month**: 1"));
    }

    #[test]
    fn test_import_report_lists_rejections() {
        let report = ImportReport {
            format: ImportFormat::Xml,
            accepted: 2,
            duplicates: 1,
            rejected: vec![RejectedRecord {
                position: 3,
                reason: "Missing <tailNumber> element".to_string(),
            }],
        };

        let output = report.to_string();
        assert!(output.contains("Imported 2 records from XML file."));
        assert!(output.contains("- Already registered: 1"));
        assert!(output.contains("- 3: Missing <tailNumber> element"));
    }
}
