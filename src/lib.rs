//! # recprep
//!
//! Cleans an e-commerce product metadata corpus and its review corpus into
//! CSV tables for recommendation-model training.
//!
//! ## Usage
//!
//! ```bash
//! recprep [-C dir] [--max-products N] [--max-reviews N] [--json-export dir]
//! ```
//!
//! ## Modules
//!
//! - `app` - Process-level configuration, logging and fatal error handling
//! - `clean` - Text normalizer for product titles and descriptions
//! - `cli` - Command-line arguments
//! - `config` - Layered pipeline configuration (defaults, TOML, environment)
//! - `filter` - Referential filter from reviews to products
//! - `ingest` - Bounded gzip JSON-lines loaders for products and reviews
//! - `output` - CSV and JSON writers
//! - `pipeline` - The end-to-end cleaning run
//! - `table` - Ordered record tables with union-of-keys columns
pub mod app;
pub mod clean;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod output;
pub mod pipeline;
pub mod table;


pub use error::{RecprepError, Result};
pub use pipeline::{run, RunReport};
