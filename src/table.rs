//! In-memory record tables
//!
//! A [`Table`] is an ordered collection of decoded JSON objects. Columns are
//! not declared up front; they are the union of keys seen across records,
//! in first-seen order.

use indexmap::IndexSet;
use serde_json::{Map, Value};

/// One decoded JSON-lines record
pub type Record = Map<String, Value>;

/// Ordered collection of records in encounter order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Union of keys across all records, first-seen order
    pub fn columns(&self) -> IndexSet<&str> {
        let mut columns = IndexSet::new();
        for record in &self.records {
            for key in record.keys() {
                columns.insert(key.as_str());
            }
        }
        columns
    }

    /// String values of `key`, skipping records where it is absent or not a string
    pub fn string_column<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.records
            .iter()
            .filter_map(move |record| record.get(key).and_then(Value::as_str))
    }
}

impl IntoIterator for Table {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
