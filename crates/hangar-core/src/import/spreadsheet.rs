//! Excel (`.xlsx`) reader.
//!
//! Only the first worksheet is read. Its first used row is a header and is
//! skipped; the remaining rows are records with the layout fields in
//! column order starting at the first used column. Rows with no value in
//! any layout column are ignored.

use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx, XlsxError};
use jiff::{civil, Span};

use super::{
    record::{RecordLayout, Row, Rows},
    ImportFormat,
};
use crate::error::{Result, TrackerError};

pub(super) fn read_rows(path: &Path, layout: RecordLayout) -> Result<Rows> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| match e {
        XlsxError::Io(source) => TrackerError::FileSystem {
            path: path.to_path_buf(),
            source,
        },
        other => parse_error(other.to_string()),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| parse_error("Workbook contains no worksheet".to_string()))?
        .map_err(|e| parse_error(e.to_string()))?;

    let rows = shape_range(&range, layout);
    Ok(Box::new(rows.into_iter().map(Ok)))
}

fn parse_error(message: String) -> TrackerError {
    TrackerError::Parse {
        format: ImportFormat::Xlsx,
        message,
    }
}

fn shape_range(range: &Range<Data>, layout: RecordLayout) -> Vec<Row> {
    let (Some((first_row, first_col)), Some((last_row, _))) = (range.start(), range.end()) else {
        return Vec::new();
    };

    let mut rows = Vec::new();

    for row in (first_row + 1)..=last_row {
        let cells: Vec<Option<String>> = (0..layout.fields.len())
            .map(|offset| {
                range
                    .get_value((row, first_col + offset as u32))
                    .and_then(cell_text)
            })
            .collect();

        if cells.iter().all(Option::is_none) {
            continue;
        }

        // Rows are 1-based in the sheet
        let position = row as usize + 1;

        let missing = cells
            .iter()
            .zip(layout.fields)
            .find_map(|(cell, field)| cell.is_none().then_some(*field));

        rows.push(match missing {
            Some(field) => Row::Malformed {
                position,
                reason: format!("Missing value for column '{field}'"),
            },
            None => Row::Fields {
                position,
                values: cells.into_iter().flatten().collect(),
            },
        });
    }

    rows
}

/// Text of a cell as it would be typed into a delimited file.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Data::Int(value) => Some(value.to_string()),
        Data::Float(value) => Some(format_number(*value)),
        Data::Bool(value) => Some(value.to_string()),
        Data::DateTime(value) => {
            let serial = value.as_f64();
            Some(serial_to_date(serial).map_or_else(|| format_number(serial), |d| d.to_string()))
        }
        Data::DateTimeIso(text) => Some(text.split('T').next().unwrap_or(text).to_string()),
        Data::DurationIso(text) => Some(text.clone()),
        _ => None,
    }
}

/// Whole numbers (ids typed into a numeric cell) lose the fractional part.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

/// Converts an Excel serial day number (1900 date system) to a date.
fn serial_to_date(serial: f64) -> Option<civil::Date> {
    let days = serial.floor() as i64;
    let span = Span::new().try_days(days).ok()?;
    civil::date(1899, 12, 30).checked_add(span).ok()
}
