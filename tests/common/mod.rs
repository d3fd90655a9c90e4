//! Common test utilities and helpers
#![allow(dead_code)]

use anyhow::Result;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch working directory with gzip JSON-lines fixtures
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `records` one per line into a gzip file
    pub fn write_jsonl_gz(&self, name: &str, records: &[Value]) -> Result<PathBuf> {
        let lines: Vec<String> = records.iter().map(Value::to_string).collect();
        self.write_raw_lines_gz(name, &lines)
    }

    /// Write raw text lines into a gzip file, for malformed fixtures
    pub fn write_raw_lines_gz(&self, name: &str, lines: &[String]) -> Result<PathBuf> {
        let content: String = lines.iter().map(|line| format!("{line}\n")).collect();
        self.write_raw_bytes_gz(name, content.as_bytes())
    }

    /// Compress arbitrary bytes, for fixtures that are not valid UTF-8
    pub fn write_raw_bytes_gz(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.path().join(name);
        let mut encoder = GzEncoder::new(File::create(&path)?, Compression::fast());
        encoder.write_all(bytes)?;
        encoder.finish()?;
        Ok(path)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.path().join(name))?)
    }

    /// Parse a CSV output into its header and rows
    pub fn read_csv(&self, name: &str) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let mut reader = csv::Reader::from_path(self.path().join(name))?;
        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }
        Ok((headers, rows))
    }
}

/// Column values from parsed CSV rows
pub fn column<'a>(headers: &[String], rows: &'a [Vec<String>], name: &str) -> Vec<&'a str> {
    let index = headers
        .iter()
        .position(|h| h == name)
        .unwrap_or_else(|| panic!("missing column {name}"));
    rows.iter().map(|row| row[index].as_str()).collect()
}
