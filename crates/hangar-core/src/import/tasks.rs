//! Maintenance task import.
//!
//! Records are merged one by one. A record with an unparsable aircraft id,
//! due date or status, or one that references a missing aircraft, is
//! skipped and listed in the report; the rest of the file still imports.

use std::path::Path;

use jiff::civil::Date;
use log::{info, warn};

use super::{
    read_rows,
    record::{Row, TASK_LAYOUT},
    ImportFormat, ImportReport,
};
use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::{parse_due_date, TaskStatus},
};

struct TaskRecord<'a> {
    aircraft_id: u64,
    description: &'a str,
    due_date: Date,
    status: TaskStatus,
}

fn parse_record(position: usize, values: &[String]) -> Result<TaskRecord<'_>> {
    let malformed = |reason: String| TrackerError::MalformedRecord { position, reason };

    let raw_id = values[0].trim();
    let aircraft_id = raw_id
        .parse::<u64>()
        .map_err(|_| malformed(format!("Invalid aircraft id '{raw_id}'")))?;

    let raw_date = values[2].trim();
    let due_date = parse_due_date(raw_date)
        .map_err(|_| malformed(format!("Invalid due date '{raw_date}', expected YYYY-MM-DD")))?;

    let raw_status = values[3].trim();
    let status = raw_status
        .parse::<TaskStatus>()
        .map_err(|_| malformed(format!("Invalid status '{raw_status}'")))?;

    Ok(TaskRecord {
        aircraft_id,
        description: values[1].trim(),
        due_date,
        status,
    })
}

/// Merges the maintenance tasks in `path` into the store.
///
/// Tasks have no natural key, so importing the same file twice schedules
/// its tasks twice.
///
/// # Errors
///
/// Fails on an unsupported suffix, an unreadable or unparsable file, or a
/// store failure. Tasks accepted before a store failure stay stored.
pub fn import_tasks(db: &mut Database, path: &Path) -> Result<ImportReport> {
    let format = ImportFormat::from_path(path)?;
    let rows = read_rows(format, path, TASK_LAYOUT)?;

    let mut report = ImportReport::new(format);

    for row in rows {
        let (position, values) = match row? {
            Row::Fields { position, values } => (position, values),
            Row::Malformed { position, reason } => {
                warn!("Skipping task record {position}: {reason}");
                report.reject(position, reason);
                continue;
            }
        };

        let created = parse_record(position, &values).and_then(|task| {
            db.create_task_with_status(
                task.aircraft_id,
                task.description,
                task.due_date,
                task.status,
            )
        });

        match created {
            Ok(_) => report.accepted += 1,
            Err(TrackerError::MalformedRecord { reason, .. }) => {
                warn!("Skipping task record {position}: {reason}");
                report.reject(position, reason);
            }
            Err(e) if e.is_record_level() => {
                warn!("Skipping task record {position}: {e}");
                report.reject(position, e.to_string());
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Imported {} maintenance tasks from {} ({} rejected)",
        report.accepted,
        path.display(),
        report.rejected.len()
    );

    Ok(report)
}
