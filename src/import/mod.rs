pub mod mapping;
pub mod seed;

use crate::db::connection::Database;
use crate::db::properties::{count_properties, insert_many};
use crate::errors::ServerError;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Default, PartialEq)]
pub struct ImportReport {
    pub inserted: usize,
    /// (1-based row number, reason)
    pub skipped: Vec<(usize, String)>,
}

/// Reads an exported sheet: a JSON array of row objects keyed by header.
pub fn read_rows(path: &Path) -> Result<Vec<Value>, ServerError> {
    let file = File::open(path).map_err(|e| {
        ServerError::InvalidInput(format!("cannot open {}: {e}", path.display()))
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        ServerError::InvalidInput(format!(
            "{} is not a JSON array of rows: {e}",
            path.display()
        ))
    })
}

/// Maps every row and inserts the accepted ones in a single transaction.
pub fn import_rows(
    db: &Database,
    rows: &[Value],
    replace_existing: bool,
) -> Result<ImportReport, ServerError> {
    let mut report = ImportReport::default();
    let mut accepted = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        match mapping::map_row(row) {
            Ok(details) => accepted.push(details),
            Err(reason) => {
                tracing::warn!(row = idx + 1, %reason, "skipping row");
                report.skipped.push((idx + 1, reason));
            }
        }
    }

    report.inserted = db.with_conn(|conn| insert_many(conn, &accepted, replace_existing))?;
    let total = db.with_conn(|conn| count_properties(conn))?;
    tracing::info!(
        inserted = report.inserted,
        skipped = report.skipped.len(),
        total,
        "import finished"
    );
    Ok(report)
}
