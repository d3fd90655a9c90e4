//! CSV output for record tables

use crate::error::{RecprepError, Result};
use crate::table::Table;
use serde_json::Value;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

/// Pure: Render one JSON value as a CSV cell
///
/// Strings are written verbatim, null as an empty cell, and everything else
/// as compact JSON.
pub fn render_cell(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::String(text) => Cow::Borrowed(text.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Write `table` to `path`, replacing any existing file
///
/// The header is the union of keys across records in first-seen order.
/// Keys missing from a record become empty cells. An empty table produces
/// an empty file. Returns the number of data rows written.
pub fn write_table_csv(table: &Table, path: &Path) -> Result<usize> {
    let csv_error = |source: csv::Error| RecprepError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let columns = table.columns();
    debug!("Writing {} columns to {}", columns.len(), path.display());

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    if !columns.is_empty() {
        writer.write_record(columns.iter()).map_err(csv_error)?;
    }

    for record in table {
        let row = columns
            .iter()
            .map(|column| record.get(*column).map(render_cell).unwrap_or_default());
        writer.write_record(row.map(|cell| cell.into_owned())).map_err(csv_error)?;
    }

    writer.flush().map_err(|source| RecprepError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(table.len())
}
