//! Aircraft operations for the Tracker.

use super::Tracker;
use crate::{
    error::Result,
    models::Aircraft,
    params::{CreateAircraft, Id, UpdateAircraft},
};

impl Tracker {
    /// Lists every aircraft, ordered by ID.
    pub async fn list_aircraft(&self) -> Result<Vec<Aircraft>> {
        self.with_database(|db| db.list_aircraft()).await
    }

    /// Retrieves an aircraft by its ID.
    pub async fn get_aircraft(&self, params: &Id) -> Result<Option<Aircraft>> {
        let id = params.id;
        self.with_database(move |db| db.get_aircraft(id)).await
    }

    /// Registers a new aircraft. The tail number must not be in use.
    pub async fn create_aircraft(&self, params: &CreateAircraft) -> Result<Aircraft> {
        let model = params.model.clone();
        let tail_number = params.tail_number.clone();

        self.with_database(move |db| db.create_aircraft(&model, &tail_number))
            .await
    }

    /// Replaces model and tail number of an aircraft.
    ///
    /// Returns the number of changed rows; 0 means no aircraft has the ID.
    pub async fn update_aircraft(&self, params: &UpdateAircraft) -> Result<usize> {
        let id = params.id;
        let model = params.model.clone();
        let tail_number = params.tail_number.clone();

        self.with_database(move |db| db.update_aircraft(id, &model, &tail_number))
            .await
    }

    /// Deletes an aircraft together with its maintenance tasks.
    ///
    /// Returns the number of deleted aircraft; 0 means no aircraft has the
    /// ID.
    pub async fn delete_aircraft(&self, params: &Id) -> Result<usize> {
        let id = params.id;
        self.with_database(move |db| db.delete_aircraft(id)).await
    }
}
