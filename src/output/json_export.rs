//! JSON array export
//!
//! Writes a table as a single pretty-printed JSON array, the shape the
//! browser-side recommendation engine fetches.

use crate::error::{RecprepError, Result};
use crate::table::Table;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub fn write_table_json(table: &Table, path: &Path) -> Result<usize> {
    let write_error = |source: std::io::Error| RecprepError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, table.records()).map_err(|source| {
        RecprepError::Export {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(write_error)?;

    info!("Exported {} records to {}", table.len(), path.display());
    Ok(table.len())
}
