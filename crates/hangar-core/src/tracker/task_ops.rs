//! Maintenance task operations for the Tracker.

use super::Tracker;
use crate::{
    error::Result,
    models::MaintenanceTask,
    params::{CreateTask, Id, UpdateTaskStatus},
};

impl Tracker {
    /// Lists every task, earliest due date first.
    pub async fn list_tasks(&self) -> Result<Vec<MaintenanceTask>> {
        self.with_database(|db| db.list_tasks()).await
    }

    /// Retrieves a task by its ID.
    pub async fn get_task(&self, params: &Id) -> Result<Option<MaintenanceTask>> {
        let id = params.id;
        self.with_database(move |db| db.get_task(id)).await
    }

    /// Schedules a pending task for an existing aircraft.
    pub async fn create_task(&self, params: &CreateTask) -> Result<MaintenanceTask> {
        let aircraft_id = params.aircraft_id;
        let description = params.description.clone();
        let due_date = params.due_date;

        self.with_database(move |db| db.create_task(aircraft_id, &description, due_date))
            .await
    }

    /// Sets the status of a task.
    ///
    /// Returns the number of changed rows; 0 means no task has the ID.
    pub async fn update_task_status(&self, params: &UpdateTaskStatus) -> Result<usize> {
        let id = params.id;
        let status = params.status;
        self.with_database(move |db| db.update_task_status(id, status))
            .await
    }
}
