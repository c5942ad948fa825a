//! Aircraft import with tail-number deduplication.

use std::{collections::HashSet, path::Path};

use log::{debug, info, warn};

use super::{
    read_rows,
    record::{Row, AIRCRAFT_LAYOUT},
    ImportFormat, ImportReport,
};
use crate::{db::Database, error::Result};

/// Merges the aircraft in `path` into the store.
///
/// The set of known tail numbers is loaded once and grows with every
/// accepted record, so a tail number repeated inside the file is only
/// inserted once. Importing the same file twice adds nothing the second
/// time.
///
/// # Errors
///
/// Fails on an unsupported suffix, an unreadable or unparsable file, or a
/// store failure. Aircraft accepted before a store failure stay stored.
pub fn import_aircraft(db: &mut Database, path: &Path) -> Result<ImportReport> {
    let format = ImportFormat::from_path(path)?;
    let rows = read_rows(format, path, AIRCRAFT_LAYOUT)?;

    let mut known: HashSet<String> = db.tail_numbers()?;
    let mut report = ImportReport::new(format);

    for row in rows {
        let (position, values) = match row? {
            Row::Fields { position, values } => (position, values),
            Row::Malformed { position, reason } => {
                warn!("Skipping aircraft record {position}: {reason}");
                report.reject(position, reason);
                continue;
            }
        };

        let model = values[0].trim();
        let tail_number = values[1].trim();

        if tail_number.is_empty() {
            warn!("Skipping aircraft record {position}: empty tail number");
            report.reject(position, "Tail number is empty");
            continue;
        }

        if known.contains(tail_number) {
            debug!("Aircraft {tail_number} already registered, skipping");
            report.duplicates += 1;
            continue;
        }

        match db.create_aircraft(model, tail_number) {
            Ok(aircraft) => {
                known.insert(aircraft.tail_number);
                report.accepted += 1;
            }
            Err(e) if e.is_record_level() => {
                warn!("Skipping aircraft record {position}: {e}");
                report.reject(position, e.to_string());
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Imported {} aircraft from {} ({} duplicates, {} rejected)",
        report.accepted,
        path.display(),
        report.duplicates,
        report.rejected.len()
    );

    Ok(report)
}
