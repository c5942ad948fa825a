#[cfg(test)]
mod model_tests {
    use jiff::civil::date;

    use crate::models::{Aircraft, MaintenanceTask, TaskStatus};

    fn create_test_aircraft() -> Aircraft {
        Aircraft {
            id: 2,
            model: "Boeing 747".to_string(),
            tail_number: "N373BA".to_string(),
        }
    }

    fn create_test_task(status: TaskStatus) -> MaintenanceTask {
        MaintenanceTask {
            id: 11,
            aircraft_id: 2,
            aircraft_display: "Boeing 747 (N373BA)".to_string(),
            description: "Inspect landing gear".to_string(),
            due_date: date(2025, 5, 14),
            status,
        }
    }

    #[test]
    fn test_aircraft_display_name() {
        let aircraft = create_test_aircraft();
        assert_eq!(aircraft.display_name(), "Boeing 747 (N373BA)");
    }

    #[test]
    fn test_task_status_parsing() {
        assert_eq!("Pending".parse::<TaskStatus>(), Ok(TaskStatus::Pending));
        assert_eq!("pending".parse::<TaskStatus>(), Ok(TaskStatus::Pending));
        assert_eq!("COMPLETED".parse::<TaskStatus>(), Ok(TaskStatus::Completed));
        assert_eq!(" Complete ".parse::<TaskStatus>(), Ok(TaskStatus::Completed));

        assert!("Done".parse::<TaskStatus>().is_err());
        assert!("".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_task_status_round_trips_through_store_form() {
        for status in [TaskStatus::Pending, TaskStatus::Completed] {
            assert_eq!(status.as_str().parse::<TaskStatus>(), Ok(status));
        }
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn test_task_is_pending() {
        assert!(create_test_task(TaskStatus::Pending).is_pending());
        assert!(!create_test_task(TaskStatus::Completed).is_pending());
    }

    #[test]
    fn test_task_due_in_month_of() {
        let task = create_test_task(TaskStatus::Completed);

        assert!(task.is_due_in_month_of(date(2025, 5, 1)));
        assert!(task.is_due_in_month_of(date(2025, 5, 31)));
        assert!(!task.is_due_in_month_of(date(2025, 6, 14)));
        // Same month, different year
        assert!(!task.is_due_in_month_of(date(2024, 5, 14)));
    }
}
