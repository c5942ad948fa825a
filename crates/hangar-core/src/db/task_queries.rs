//! Maintenance task operations and queries.
//!
//! This is the only code that writes the `maintenance_task` table. A task
//! must reference an existing aircraft when it is created; the existence
//! check runs in the same transaction as the insert and the foreign key
//! constraint backs it up.

use jiff::civil::Date;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{is_foreign_key_violation, DatabaseResultExt, Result, TrackerError},
    models::{aircraft::display_name, parse_due_date, MaintenanceTask, TaskStatus},
};

const CHECK_AIRCRAFT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM aircraft WHERE id = ?1)";
const INSERT_TASK_SQL: &str = "INSERT INTO maintenance_task (aircraft_id, task_description, due_date, status) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TASKS_SQL: &str = "SELECT mt.id, mt.aircraft_id, a.model, a.tail_number, mt.task_description, mt.due_date, mt.status FROM maintenance_task mt JOIN aircraft a ON mt.aircraft_id = a.id ORDER BY mt.due_date ASC, mt.id ASC";
const SELECT_TASKS_FOR_AIRCRAFT_SQL: &str = "SELECT mt.id, mt.aircraft_id, a.model, a.tail_number, mt.task_description, mt.due_date, mt.status FROM maintenance_task mt JOIN aircraft a ON mt.aircraft_id = a.id WHERE mt.aircraft_id = ?1 ORDER BY mt.due_date ASC, mt.id ASC";
const SELECT_TASK_SQL: &str = "SELECT mt.id, mt.aircraft_id, a.model, a.tail_number, mt.task_description, mt.due_date, mt.status FROM maintenance_task mt JOIN aircraft a ON mt.aircraft_id = a.id WHERE mt.id = ?1";
const UPDATE_TASK_STATUS_SQL: &str = "UPDATE maintenance_task SET status = ?1 WHERE id = ?2";

impl super::Database {
    /// Helper function to construct a MaintenanceTask from a joined row
    fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<MaintenanceTask> {
        let model: String = row.get(2)?;
        let tail_number: String = row.get(3)?;

        let due_date = parse_due_date(&row.get::<_, String>(5)?).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
        })?;

        let status_str: String = row.get(6)?;
        let status = status_str.parse::<TaskStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                6,
                Type::Text,
                format!("Invalid task status: {status_str}").into(),
            )
        })?;

        Ok(MaintenanceTask {
            id: row.get::<_, i64>(0)? as u64,
            aircraft_id: row.get::<_, i64>(1)? as u64,
            aircraft_display: display_name(&model, &tail_number),
            description: row.get(4)?,
            due_date,
            status,
        })
    }

    /// Lists every task, earliest due date first.
    ///
    /// Tasks due on the same day keep their creation order.
    pub fn list_tasks(&self) -> Result<Vec<MaintenanceTask>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASKS_SQL)
            .db_context("Failed to prepare query")?;

        let tasks = stmt
            .query_map([], Self::build_task_from_row)
            .db_context("Failed to query maintenance tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch maintenance tasks")?;

        Ok(tasks)
    }

    /// Lists the tasks scheduled for one aircraft, earliest due date first.
    pub fn list_tasks_for_aircraft(&self, aircraft_id: u64) -> Result<Vec<MaintenanceTask>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASKS_FOR_AIRCRAFT_SQL)
            .db_context("Failed to prepare query")?;

        let tasks = stmt
            .query_map(params![aircraft_id as i64], Self::build_task_from_row)
            .db_context("Failed to query maintenance tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch maintenance tasks")?;

        Ok(tasks)
    }

    /// Retrieves a task by its ID.
    pub fn get_task(&self, id: u64) -> Result<Option<MaintenanceTask>> {
        self.connection
            .query_row(SELECT_TASK_SQL, params![id as i64], Self::build_task_from_row)
            .optional()
            .db_context("Failed to query maintenance task")
    }

    /// Schedules a new task for an aircraft. The task starts out pending.
    ///
    /// Fails with [`TrackerError::Referential`] when the aircraft does not
    /// exist; no row is written in that case.
    pub fn create_task(
        &mut self,
        aircraft_id: u64,
        description: &str,
        due_date: Date,
    ) -> Result<MaintenanceTask> {
        self.create_task_with_status(aircraft_id, description, due_date, TaskStatus::Pending)
    }

    /// Schedules a new task with an explicit status.
    ///
    /// Used by task import, where files carry the status of each record.
    pub fn create_task_with_status(
        &mut self,
        aircraft_id: u64,
        description: &str,
        due_date: Date,
        status: TaskStatus,
    ) -> Result<MaintenanceTask> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TrackerError::validation("description")
                .with_reason("Task description must not be empty"));
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let aircraft_exists: bool = tx
            .query_row(CHECK_AIRCRAFT_EXISTS_SQL, params![aircraft_id as i64], |row| {
                row.get(0)
            })
            .db_context("Failed to check aircraft existence")?;

        if !aircraft_exists {
            return Err(TrackerError::Referential { aircraft_id });
        }

        tx.execute(
            INSERT_TASK_SQL,
            params![
                aircraft_id as i64,
                description,
                due_date.to_string(),
                status.as_str()
            ],
        )
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                TrackerError::Referential { aircraft_id }
            } else {
                TrackerError::store("Failed to insert maintenance task").with_source(e)
            }
        })?;

        let id = tx.last_insert_rowid();

        let task = tx
            .query_row(SELECT_TASK_SQL, params![id], Self::build_task_from_row)
            .db_context("Failed to read back maintenance task")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(task)
    }

    /// Sets the status of a task.
    ///
    /// Returns the number of updated rows: 0 when no task has the given ID.
    pub fn update_task_status(&mut self, id: u64, status: TaskStatus) -> Result<usize> {
        self.connection
            .execute(UPDATE_TASK_STATUS_SQL, params![status.as_str(), id as i64])
            .db_context("Failed to update task status")
    }
}
