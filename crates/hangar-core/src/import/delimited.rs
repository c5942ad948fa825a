//! CSV reader. The first line is a header and is always skipped.
//!
//! Positions are physical line numbers in the file. They are counted from
//! the first byte of the record itself, so CRLF endings and blank lines
//! before a record do not shift them.

use std::{fs, io::Cursor, path::Path, sync::Arc};

use csv::{ErrorKind, Position, ReaderBuilder, StringRecord};

use super::{
    record::{RecordLayout, Row, Rows},
    ImportFormat,
};
use crate::error::{Result, TrackerError};

pub(super) fn read_rows(path: &Path, layout: RecordLayout) -> Result<Rows> {
    let contents: Arc<[u8]> = fs::read(path)
        .map_err(|source| TrackerError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?
        .into();
    let lines = LineIndex::new(Arc::clone(&contents));

    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(contents));

    let path = path.to_path_buf();
    let rows = reader
        .into_records()
        .enumerate()
        .map(move |(index, result)| {
            // +2 for 1-indexed lines and the header line
            let fallback_line = index + 2;

            match result {
                Ok(record) => {
                    let position = lines.line_of(record.position(), fallback_line);
                    Ok(shape_record(&record, layout, position))
                }
                Err(err) => match err.into_kind() {
                    ErrorKind::Utf8 { pos, .. } => Ok(Row::Malformed {
                        position: lines.line_of(pos.as_ref(), fallback_line),
                        reason: "Record is not valid UTF-8".to_string(),
                    }),
                    ErrorKind::Io(source) => Err(TrackerError::FileSystem {
                        path: path.clone(),
                        source,
                    }),
                    other => Err(TrackerError::Parse {
                        format: ImportFormat::Csv,
                        message: format!("line {fallback_line}: {other:?}"),
                    }),
                },
            }
        });

    Ok(Box::new(rows))
}

/// Maps byte offsets reported by the reader to line numbers.
struct LineIndex {
    contents: Arc<[u8]>,
    newlines: Vec<usize>,
}

impl LineIndex {
    fn new(contents: Arc<[u8]>) -> Self {
        let newlines = contents
            .iter()
            .enumerate()
            .filter(|(_, byte)| **byte == b'\n')
            .map(|(offset, _)| offset)
            .collect();
        Self { contents, newlines }
    }

    /// 1-based line of the first byte of the record read from `pos`.
    ///
    /// The reader reports the offset where it started reading, which can
    /// sit on the terminator of the previous record or on blank lines.
    fn line_of(&self, pos: Option<&Position>, fallback: usize) -> usize {
        let Some(pos) = pos else {
            return fallback;
        };

        let start = usize::try_from(pos.byte())
            .unwrap_or(usize::MAX)
            .min(self.contents.len());
        let first = self.contents[start..]
            .iter()
            .position(|byte| !matches!(byte, b'\r' | b'\n'))
            .map_or(self.contents.len(), |skipped| start + skipped);

        self.newlines.partition_point(|&offset| offset < first) + 1
    }
}

fn shape_record(record: &StringRecord, layout: RecordLayout, position: usize) -> Row {
    if record.len() != layout.fields.len() {
        return Row::Malformed {
            position,
            reason: format!(
                "Expected {} fields ({}), found {}",
                layout.fields.len(),
                layout.fields.join(", "),
                record.len()
            ),
        };
    }

    Row::Fields {
        position,
        values: record.iter().map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_index_skips_terminators_and_blank_lines() {
        let contents: &[u8] = b"model,tailNumber\r\nB,N1\r\n\r\nA320,N2,extra\r\n";
        let lines = LineIndex::new(contents.into());

        let mut pos = Position::new();
        pos.set_byte(0);
        assert_eq!(lines.line_of(Some(&pos), 9), 1);

        // Offset 23 is the '\n' closing "B,N1", followed by a blank line
        pos.set_byte(23);
        assert_eq!(lines.line_of(Some(&pos), 9), 4);

        pos.set_byte(26);
        assert_eq!(lines.line_of(Some(&pos), 9), 4);

        assert_eq!(lines.line_of(None, 9), 9);
    }
}
