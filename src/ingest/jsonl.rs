//! Bounded reader for gzip-compressed JSON-lines files
//!
//! Only the first `limit` lines are pulled through the decompressor; the
//! rest of the file is never read. Every line must decode to a JSON object,
//! and the first line that doesn't ends the iteration with an error. Lines
//! are split as raw bytes, so invalid UTF-8 is a decoding error for that
//! line rather than a read failure.

use crate::error::{RecprepError, Result};
use crate::table::Record;
use flate2::read::MultiGzDecoder;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Split};
use std::iter::Take;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A gzip JSON-lines file with a prefix cutoff
#[derive(Debug, Clone)]
pub struct JsonLinesSource {
    path: PathBuf,
    limit: usize,
}

impl JsonLinesSource {
    pub fn new(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            path: path.into(),
            limit,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Open the file and return an iterator over its leading records
    pub fn open(&self) -> Result<JsonLines> {
        let file = File::open(&self.path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                RecprepError::InputNotFound {
                    path: self.path.clone(),
                }
            } else {
                RecprepError::Read {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        debug!(
            "Opened {} (reading at most {} lines)",
            self.path.display(),
            self.limit
        );

        let reader = BufReader::new(MultiGzDecoder::new(file));
        Ok(JsonLines {
            path: self.path.clone(),
            lines: reader.split(b'\n').take(self.limit),
            line_no: 0,
        })
    }
}

/// Iterator over decoded records; yields at most `limit` items
pub struct JsonLines {
    path: PathBuf,
    lines: Take<Split<BufReader<MultiGzDecoder<File>>>>,
    line_no: usize,
}

impl JsonLines {
    /// Number of lines pulled from the file so far
    pub fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl Iterator for JsonLines {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_no += 1;

        let line = match line {
            Ok(line) => line,
            Err(source) => {
                return Some(Err(RecprepError::Read {
                    path: self.path.clone(),
                    source,
                }))
            }
        };

        trace!("{}:{} ({} bytes)", self.path.display(), self.line_no, line.len());
        Some(parse_record(&line, &self.path, self.line_no))
    }
}

/// Pure: Decode one line into a record
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_record(line: &[u8], path: &Path, line_no: usize) -> Result<Record> {
    let value: Value =
        serde_json::from_slice(line).map_err(|source| RecprepError::MalformedRecord {
            path: path.to_path_buf(),
            line: line_no,
            source,
        })?;

    match value {
        Value::Object(record) => Ok(record),
        _ => Err(RecprepError::NotAnObject {
            path: path.to_path_buf(),
            line: line_no,
        }),
    }
}
