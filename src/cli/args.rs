//! CLI argument structures

use crate::config::PipelineConfig;
use clap::Parser;
use std::path::PathBuf;

/// Clean product metadata and reviews into CSV tables for recommendation training
#[derive(Parser, Debug)]
#[command(name = "recprep")]
#[command(about = "recprep - Clean product metadata and reviews into CSV tables", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding the inputs and receiving the outputs (defaults to current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,

    /// Configuration file (defaults to recprep.toml in the working directory, if present)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of leading metadata lines to read
    #[arg(long, value_name = "N")]
    pub max_products: Option<usize>,

    /// Number of leading review lines to read
    #[arg(long, value_name = "N")]
    pub max_reviews: Option<usize>,

    /// Also export products.json and reviews.json into this directory
    #[arg(long, value_name = "DIR")]
    pub json_export: Option<PathBuf>,
}

impl Cli {
    /// Apply flag overrides on top of file and environment configuration
    pub fn apply_overrides(&self, config: &mut PipelineConfig) {
        if let Some(limit) = self.max_products {
            config.max_products = limit;
        }
        if let Some(limit) = self.max_reviews {
            config.max_reviews = limit;
        }
        if let Some(dir) = &self.json_export {
            config.json_export_dir = Some(dir.clone());
        }
    }
}
