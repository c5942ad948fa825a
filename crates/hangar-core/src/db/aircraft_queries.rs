//! Aircraft CRUD operations and queries.
//!
//! This is the only code that writes the `aircraft` table. Tail numbers are
//! checked for uniqueness before every insert or update, and the `UNIQUE`
//! constraint on the column backs the check up; both paths surface as
//! [`TrackerError::Validation`].

use std::collections::HashSet;

use log::debug;
use rusqlite::{params, OptionalExtension, Transaction};

use crate::{
    error::{is_unique_violation, DatabaseResultExt, Result, TrackerError},
    models::Aircraft,
};

const SELECT_ALL_AIRCRAFT_SQL: &str = "SELECT id, model, tail_number FROM aircraft ORDER BY id";
const SELECT_AIRCRAFT_SQL: &str = "SELECT id, model, tail_number FROM aircraft WHERE id = ?1";
const CHECK_AIRCRAFT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM aircraft WHERE id = ?1)";
const CHECK_TAIL_NUMBER_TAKEN_SQL: &str =
    "SELECT EXISTS(SELECT 1 FROM aircraft WHERE tail_number = ?1 AND id <> ?2)";
const INSERT_AIRCRAFT_SQL: &str = "INSERT INTO aircraft (model, tail_number) VALUES (?1, ?2)";
const UPDATE_AIRCRAFT_SQL: &str = "UPDATE aircraft SET model = ?1, tail_number = ?2 WHERE id = ?3";
const DELETE_AIRCRAFT_SQL: &str = "DELETE FROM aircraft WHERE id = ?1";
const SELECT_TAIL_NUMBERS_SQL: &str = "SELECT tail_number FROM aircraft";
const COUNT_AIRCRAFT_SQL: &str = "SELECT COUNT(*) FROM aircraft";

impl super::Database {
    /// Helper function to construct an Aircraft from a database row
    fn build_aircraft_from_row(row: &rusqlite::Row) -> rusqlite::Result<Aircraft> {
        Ok(Aircraft {
            id: row.get::<_, i64>(0)? as u64,
            model: row.get(1)?,
            tail_number: row.get(2)?,
        })
    }

    /// Trims the tail number and rejects an empty one.
    fn normalize_tail_number(tail_number: &str) -> Result<&str> {
        let tail_number = tail_number.trim();
        if tail_number.is_empty() {
            return Err(TrackerError::validation("tail_number")
                .with_reason("Tail number must not be empty"));
        }
        Ok(tail_number)
    }

    /// Fails with a validation error when `tail_number` belongs to an
    /// aircraft other than `except_id`.
    fn ensure_tail_number_free(tx: &Transaction, tail_number: &str, except_id: i64) -> Result<()> {
        let taken: bool = tx
            .query_row(
                CHECK_TAIL_NUMBER_TAKEN_SQL,
                params![tail_number, except_id],
                |row| row.get(0),
            )
            .db_context("Failed to check tail number")?;

        if taken {
            return Err(tail_number_taken(tail_number));
        }
        Ok(())
    }

    /// Lists every aircraft in store order (by ID).
    pub fn list_aircraft(&self) -> Result<Vec<Aircraft>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_AIRCRAFT_SQL)
            .db_context("Failed to prepare query")?;

        let aircraft = stmt
            .query_map([], Self::build_aircraft_from_row)
            .db_context("Failed to query aircraft")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch aircraft")?;

        Ok(aircraft)
    }

    /// Retrieves an aircraft by its ID.
    pub fn get_aircraft(&self, id: u64) -> Result<Option<Aircraft>> {
        self.connection
            .query_row(SELECT_AIRCRAFT_SQL, params![id as i64], Self::build_aircraft_from_row)
            .optional()
            .db_context("Failed to query aircraft")
    }

    /// Registers a new aircraft.
    ///
    /// Both fields are trimmed. Fails with [`TrackerError::Validation`] when
    /// the tail number is empty or already registered, in which case nothing
    /// is written.
    pub fn create_aircraft(&mut self, model: &str, tail_number: &str) -> Result<Aircraft> {
        let model = model.trim();
        let tail_number = Self::normalize_tail_number(tail_number)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        // No aircraft may have id 0, so this checks against the whole fleet
        Self::ensure_tail_number_free(&tx, tail_number, 0)?;

        tx.execute(INSERT_AIRCRAFT_SQL, params![model, tail_number])
            .map_err(|e| {
                if is_unique_violation(&e) {
                    tail_number_taken(tail_number)
                } else {
                    TrackerError::store("Failed to insert aircraft").with_source(e)
                }
            })?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Registered aircraft {id} ({tail_number})");

        Ok(Aircraft {
            id,
            model: model.to_string(),
            tail_number: tail_number.to_string(),
        })
    }

    /// Replaces model and tail number of an aircraft.
    ///
    /// Returns the number of updated rows: 0 when no aircraft has the given
    /// ID, 1 otherwise. A missing aircraft is not an error, and is reported
    /// as 0 before the new values are validated.
    pub fn update_aircraft(&mut self, id: u64, model: &str, tail_number: &str) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_AIRCRAFT_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check aircraft existence")?;

        if !exists {
            return Ok(0);
        }

        let model = model.trim();
        let tail_number = Self::normalize_tail_number(tail_number)?;

        Self::ensure_tail_number_free(&tx, tail_number, id as i64)?;

        let rows_affected = tx
            .execute(UPDATE_AIRCRAFT_SQL, params![model, tail_number, id as i64])
            .map_err(|e| {
                if is_unique_violation(&e) {
                    tail_number_taken(tail_number)
                } else {
                    TrackerError::store("Failed to update aircraft").with_source(e)
                }
            })?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(rows_affected)
    }

    /// Deletes an aircraft and, through the foreign key cascade, its tasks.
    ///
    /// Returns the number of deleted aircraft rows (0 or 1).
    pub fn delete_aircraft(&mut self, id: u64) -> Result<usize> {
        let rows_affected = self
            .connection
            .execute(DELETE_AIRCRAFT_SQL, params![id as i64])
            .db_context("Failed to delete aircraft")?;

        if rows_affected > 0 {
            debug!("Deleted aircraft {id} and its maintenance tasks");
        }

        Ok(rows_affected)
    }

    /// Loads every registered tail number in a single query.
    pub fn tail_numbers(&self) -> Result<HashSet<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TAIL_NUMBERS_SQL)
            .db_context("Failed to prepare query")?;

        let tail_numbers = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .db_context("Failed to query tail numbers")?
            .collect::<std::result::Result<HashSet<_>, _>>()
            .db_context("Failed to fetch tail numbers")?;

        Ok(tail_numbers)
    }

    /// Counts the registered aircraft.
    pub fn count_aircraft(&self) -> Result<usize> {
        let count: i64 = self
            .connection
            .query_row(COUNT_AIRCRAFT_SQL, [], |row| row.get(0))
            .db_context("Failed to count aircraft")?;

        Ok(count as usize)
    }
}

fn tail_number_taken(tail_number: &str) -> TrackerError {
    TrackerError::validation("tail_number")
        .with_reason(format!("Tail number '{tail_number}' is already registered"))
}
