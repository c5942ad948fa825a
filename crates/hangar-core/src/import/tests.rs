#[cfg(test)]
mod reader_tests {
    use std::{
        fs,
        path::{Path, PathBuf},
    };

    use tempfile::TempDir;

    use crate::{
        error::TrackerError,
        import::{
            read_rows, ImportFormat, ImportReport, RecordLayout, Row, AIRCRAFT_LAYOUT, TASK_LAYOUT,
        },
    };

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write import file");
        path
    }

    fn collect(format: ImportFormat, path: &Path, layout: RecordLayout) -> Vec<Row> {
        read_rows(format, path, layout)
            .expect("Failed to open import file")
            .collect::<Result<Vec<_>, _>>()
            .expect("Failed to read rows")
    }

    #[test]
    fn test_format_from_suffix() {
        assert_eq!(ImportFormat::from_path("a.csv").unwrap(), ImportFormat::Csv);
        assert_eq!(ImportFormat::from_path("a.Xml").unwrap(), ImportFormat::Xml);
        assert_eq!(ImportFormat::from_path("dir/a.XLSX").unwrap(), ImportFormat::Xlsx);

        for name in ["a.json", "a.xls", "a", "csv"] {
            assert!(matches!(
                ImportFormat::from_path(name),
                Err(TrackerError::UnsupportedFormat { .. })
            ));
        }
    }

    #[test]
    fn test_csv_skips_header_and_keeps_line_numbers() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "fleet.csv",
            "model,tailNumber\nA320,N100\nB737\n\"Dash 8, Q400\",N300\n",
        );

        let rows = collect(ImportFormat::Csv, &path, AIRCRAFT_LAYOUT);

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            Row::Fields {
                position: 2,
                values: vec!["A320".to_string(), "N100".to_string()]
            }
        );
        assert!(matches!(rows[1], Row::Malformed { position: 3, .. }));
        assert_eq!(
            rows[2],
            Row::Fields {
                position: 4,
                values: vec!["Dash 8, Q400".to_string(), "N300".to_string()]
            }
        );
    }

    #[test]
    fn test_csv_header_only_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "empty.csv", "model,tailNumber\n");

        assert!(collect(ImportFormat::Csv, &path, AIRCRAFT_LAYOUT).is_empty());
    }

    #[test]
    fn test_missing_file_is_file_system_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.csv");

        let result = read_rows(ImportFormat::Csv, &path, AIRCRAFT_LAYOUT);
        assert!(matches!(result, Err(TrackerError::FileSystem { .. })));
    }

    #[test]
    fn test_xml_records_and_missing_children() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "tasks.xml",
            r#"<?xml version="1.0"?>
<tasks>
  <task>
    <aircraftId>1</aircraftId>
    <description>Engine check</description>
    <dueDate>2024-05-01</dueDate>
    <status>Pending</status>
  </task>
  <task>
    <aircraftId>1</aircraftId>
    <dueDate>2024-05-02</dueDate>
    <status>Pending</status>
  </task>
</tasks>"#,
        );

        let rows = collect(ImportFormat::Xml, &path, TASK_LAYOUT);

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            Row::Fields {
                position: 1,
                values: vec![
                    "1".to_string(),
                    "Engine check".to_string(),
                    "2024-05-01".to_string(),
                    "Pending".to_string()
                ]
            }
        );
        match &rows[1] {
            Row::Malformed { position, reason } => {
                assert_eq!(*position, 2);
                assert!(reason.contains("description"));
            }
            other => panic!("Expected malformed row, got {other:?}"),
        }
    }

    #[test]
    fn test_xml_nested_fields_are_found() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "fleet.xml",
            "<fleet><aircraft><info><model>A320</model></info><tailNumber> N1 </tailNumber></aircraft></fleet>",
        );

        let rows = collect(ImportFormat::Xml, &path, AIRCRAFT_LAYOUT);

        assert_eq!(
            rows,
            vec![Row::Fields {
                position: 1,
                values: vec!["A320".to_string(), " N1 ".to_string()]
            }]
        );
    }

    #[test]
    fn test_unparsable_xml_aborts() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "broken.xml", "<fleet><aircraft></fleet>");

        let result = read_rows(ImportFormat::Xml, &path, AIRCRAFT_LAYOUT);
        assert!(matches!(
            result,
            Err(TrackerError::Parse {
                format: ImportFormat::Xml,
                ..
            })
        ));
    }

    #[test]
    fn test_garbage_xlsx_aborts() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "fleet.xlsx", "not a workbook");

        let result = read_rows(ImportFormat::Xlsx, &path, AIRCRAFT_LAYOUT);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_skipped_counts_duplicates_and_rejections() {
        let mut report = ImportReport::new(ImportFormat::Csv);
        report.duplicates = 2;
        report.reject(4, "bad");

        assert_eq!(report.skipped(), 3);
        assert_eq!(report.rejected[0].position, 4);
    }
}
