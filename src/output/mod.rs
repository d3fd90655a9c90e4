//! Table serialization
//!
//! - `csv_writer` - Delimited output with a union-of-keys header
//! - `json_export` - Optional JSON array export for browser consumers

pub mod csv_writer;
pub mod json_export;

pub use csv_writer::{render_cell, write_table_csv};
pub use json_export::write_table_json;
