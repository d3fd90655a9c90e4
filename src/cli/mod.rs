//! CLI argument handling
//!
//! - `args` - Argument structures and their mapping onto the pipeline config

pub mod args;

pub use args::Cli;
