mod common;

use common::create_test_db;
use hangar_core::{Database, TaskStatus, TrackerError};
use jiff::civil::date;

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert!(db.list_aircraft().unwrap().is_empty());
    assert!(db.list_tasks().unwrap().is_empty());
}

#[test]
fn test_reopening_keeps_data() {
    let (temp_file, mut db) = create_test_db();
    db.create_aircraft("Cessna 172", "N12345").unwrap();
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.count_aircraft().unwrap(), 1);
}

#[test]
fn test_create_and_get_aircraft() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .create_aircraft("  Airbus A320 ", " D-AIPX ")
        .expect("Failed to create aircraft");

    assert!(created.id > 0);
    assert_eq!(created.model, "Airbus A320");
    assert_eq!(created.tail_number, "D-AIPX");

    let fetched = db
        .get_aircraft(created.id)
        .unwrap()
        .expect("Aircraft should exist");
    assert_eq!(fetched, created);
    assert!(db.get_aircraft(created.id + 1).unwrap().is_none());
}

#[test]
fn test_list_aircraft_ordered_by_id() {
    let (_temp_file, mut db) = create_test_db();

    for tail in ["N3", "N1", "N2"] {
        db.create_aircraft("Piper PA-28", tail).unwrap();
    }

    let tails: Vec<String> = db
        .list_aircraft()
        .unwrap()
        .into_iter()
        .map(|a| a.tail_number)
        .collect();
    assert_eq!(tails, vec!["N3", "N1", "N2"]);
}

#[test]
fn test_tail_number_uniqueness() {
    let (_temp_file, mut db) = create_test_db();

    db.create_aircraft("Cessna 172", "N12345").unwrap();

    let duplicate = db.create_aircraft("Cessna 182", "N12345");
    match duplicate {
        Err(TrackerError::Validation { field, reason }) => {
            assert_eq!(field, "tail_number");
            assert!(reason.contains("N12345"));
        }
        other => panic!("Expected validation error, got {other:?}"),
    }

    // Surrounding whitespace does not make a new tail number
    assert!(db.create_aircraft("Cessna 182", " N12345").is_err());
    assert_eq!(db.count_aircraft().unwrap(), 1);
}

#[test]
fn test_empty_tail_number_is_rejected() {
    let (_temp_file, mut db) = create_test_db();

    assert!(matches!(
        db.create_aircraft("Cessna 172", "   "),
        Err(TrackerError::Validation { .. })
    ));
    assert_eq!(db.count_aircraft().unwrap(), 0);
}

#[test]
fn test_update_aircraft() {
    let (_temp_file, mut db) = create_test_db();

    let first = db.create_aircraft("Cessna 172", "N1").unwrap();
    let second = db.create_aircraft("Cessna 182", "N2").unwrap();

    // Keeping its own tail number is fine
    assert_eq!(db.update_aircraft(first.id, "Cessna 172S", "N1").unwrap(), 1);

    // Taking another aircraft's tail number is not
    assert!(matches!(
        db.update_aircraft(first.id, "Cessna 172S", "N2"),
        Err(TrackerError::Validation { .. })
    ));

    let unchanged = db.get_aircraft(second.id).unwrap().unwrap();
    assert_eq!(unchanged.tail_number, "N2");

    let updated = db.get_aircraft(first.id).unwrap().unwrap();
    assert_eq!(updated.model, "Cessna 172S");
}

#[test]
fn test_update_and_delete_missing_aircraft_return_zero() {
    let (_temp_file, mut db) = create_test_db();

    assert_eq!(db.update_aircraft(42, "Ghost", "N0").unwrap(), 0);
    // A missing aircraft wins over invalid new values
    assert_eq!(db.update_aircraft(42, "Ghost", "   ").unwrap(), 0);
    assert_eq!(db.delete_aircraft(42).unwrap(), 0);
    assert_eq!(db.count_aircraft().unwrap(), 0);
}

#[test]
fn test_delete_aircraft_cascades_to_tasks() {
    let (_temp_file, mut db) = create_test_db();

    let doomed = db.create_aircraft("Cessna 172", "N1").unwrap();
    let kept = db.create_aircraft("Cessna 182", "N2").unwrap();
    db.create_task(doomed.id, "Oil change", date(2024, 1, 10)).unwrap();
    db.create_task(kept.id, "Tire change", date(2024, 1, 11)).unwrap();

    assert_eq!(db.delete_aircraft(doomed.id).unwrap(), 1);

    let tasks = db.list_tasks().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].aircraft_id, kept.id);
    assert_eq!(db.list_tasks().unwrap().len(), 1);
}

#[test]
fn test_create_task_defaults_to_pending() {
    let (_temp_file, mut db) = create_test_db();

    let aircraft = db.create_aircraft("Cessna 172", "N1").unwrap();
    let task = db
        .create_task(aircraft.id, "100-hour inspection", date(2024, 3, 1))
        .expect("Failed to create task");

    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.aircraft_display, "Cessna 172 (N1)");
    assert_eq!(task.due_date, date(2024, 3, 1));
}

#[test]
fn test_create_task_for_missing_aircraft_writes_nothing() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.create_task(99, "Inspection", date(2024, 3, 1));

    assert!(matches!(
        result,
        Err(TrackerError::Referential { aircraft_id: 99 })
    ));
    assert_eq!(db.list_tasks().unwrap().len(), 0);
}

#[test]
fn test_empty_task_description_is_rejected() {
    let (_temp_file, mut db) = create_test_db();
    let aircraft = db.create_aircraft("Cessna 172", "N1").unwrap();

    assert!(matches!(
        db.create_task(aircraft.id, "  ", date(2024, 3, 1)),
        Err(TrackerError::Validation { .. })
    ));
}

#[test]
fn test_tasks_are_ordered_by_due_date() {
    let (_temp_file, mut db) = create_test_db();
    let aircraft = db.create_aircraft("Cessna 172", "N1").unwrap();

    db.create_task(aircraft.id, "Third", date(2024, 12, 1)).unwrap();
    db.create_task(aircraft.id, "First", date(2023, 2, 28)).unwrap();
    db.create_task(aircraft.id, "Second", date(2024, 1, 15)).unwrap();
    db.create_task(aircraft.id, "Second again", date(2024, 1, 15))
        .unwrap();

    let descriptions: Vec<String> = db
        .list_tasks()
        .unwrap()
        .into_iter()
        .map(|t| t.description)
        .collect();

    assert_eq!(
        descriptions,
        vec!["First", "Second", "Second again", "Third"]
    );

    let tasks = db.list_tasks().unwrap();
    assert!(tasks.windows(2).all(|w| w[0].due_date <= w[1].due_date));
}

#[test]
fn test_update_task_status() {
    let (_temp_file, mut db) = create_test_db();
    let aircraft = db.create_aircraft("Cessna 172", "N1").unwrap();
    let task = db.create_task(aircraft.id, "Oil change", date(2024, 3, 1)).unwrap();

    assert_eq!(db.update_task_status(task.id, TaskStatus::Completed).unwrap(), 1);
    assert_eq!(
        db.get_task(task.id).unwrap().unwrap().status,
        TaskStatus::Completed
    );

    assert_eq!(db.update_task_status(task.id + 100, TaskStatus::Completed).unwrap(), 0);
}

#[test]
fn test_tasks_for_aircraft() {
    let (_temp_file, mut db) = create_test_db();
    let a = db.create_aircraft("Cessna 172", "N1").unwrap();
    let b = db.create_aircraft("Cessna 182", "N2").unwrap();

    db.create_task(a.id, "A task", date(2024, 3, 1)).unwrap();
    db.create_task(b.id, "B task", date(2024, 2, 1)).unwrap();
    db.create_task(a.id, "Another A task", date(2024, 1, 1)).unwrap();

    let tasks = db.list_tasks_for_aircraft(a.id).unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].description, "Another A task");
    assert!(tasks.iter().all(|t| t.aircraft_id == a.id));
}

#[test]
fn test_tail_numbers_index() {
    let (_temp_file, mut db) = create_test_db();
    db.create_aircraft("Cessna 172", "N1").unwrap();
    db.create_aircraft("Cessna 182", "N2").unwrap();

    let index = db.tail_numbers().unwrap();
    assert_eq!(index.len(), 2);
    assert!(index.contains("N1"));
    assert!(index.contains("N2"));
}

#[test]
fn test_in_memory_database() {
    let mut db = Database::in_memory().expect("Failed to open in-memory database");
    db.create_aircraft("Cessna 172", "N1").unwrap();
    assert_eq!(db.count_aircraft().unwrap(), 1);
}
