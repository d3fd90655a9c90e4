//! Pipeline configuration
//!
//! Values are layered, lowest priority first:
//! 1. Built-in defaults (the reference Electronics run)
//! 2. `recprep.toml` in the working directory, or an explicit `--config` file
//! 3. `RECPREP_*` environment variables
//! 4. Command-line flags (applied by the binary)

pub mod loader;

pub use loader::{load_config, LoadedConfig, DEFAULT_CONFIG_FILE};

use crate::error::{RecprepError, Result};
use crate::ingest::RatingRange;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_PRODUCTS_INPUT: &str = "meta_Electronics.json.gz";
pub const DEFAULT_REVIEWS_INPUT: &str = "Electronics_5.json.gz";
pub const DEFAULT_PRODUCTS_OUTPUT: &str = "cleaned_products.csv";
pub const DEFAULT_REVIEWS_OUTPUT: &str = "cleaned_reviews.csv";
pub const DEFAULT_MAX_PRODUCTS: usize = 5000;
pub const DEFAULT_MAX_REVIEWS: usize = 10000;

/// Everything a single cleaning run needs
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub products_input: PathBuf,
    pub reviews_input: PathBuf,
    pub products_output: PathBuf,
    pub reviews_output: PathBuf,
    /// Leading metadata lines to read
    pub max_products: usize,
    /// Leading review lines to read, before any filtering
    pub max_reviews: usize,
    pub min_rating: f64,
    pub max_rating: f64,
    /// Also write `products.json` / `reviews.json` here when set
    pub json_export_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            products_input: PathBuf::from(DEFAULT_PRODUCTS_INPUT),
            reviews_input: PathBuf::from(DEFAULT_REVIEWS_INPUT),
            products_output: PathBuf::from(DEFAULT_PRODUCTS_OUTPUT),
            reviews_output: PathBuf::from(DEFAULT_REVIEWS_OUTPUT),
            max_products: DEFAULT_MAX_PRODUCTS,
            max_reviews: DEFAULT_MAX_REVIEWS,
            min_rating: 1.0,
            max_rating: 5.0,
            json_export_dir: None,
            log_level: None,
        }
    }
}

/// An environment override that could not be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredEnvVar {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for IgnoredEnvVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ignoring {}={}: not a count", self.key, self.value)
    }
}

impl PipelineConfig {
    pub fn merge_env_vars(&mut self) -> Vec<IgnoredEnvVar> {
        self.merge_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `RECPREP_*` overrides from `lookup`
    ///
    /// Unparseable counts leave the current value in place and are returned
    /// so the caller can report them once logging is up.
    pub fn merge_env_from<F>(&mut self, lookup: F) -> Vec<IgnoredEnvVar>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ignored = Vec::new();
        let mut parse_count = |key: &'static str, target: &mut usize| {
            if let Some(value) = lookup(key) {
                match value.trim().parse() {
                    Ok(limit) => *target = limit,
                    Err(_) => ignored.push(IgnoredEnvVar { key, value }),
                }
            }
        };

        parse_count("RECPREP_MAX_PRODUCTS", &mut self.max_products);
        parse_count("RECPREP_MAX_REVIEWS", &mut self.max_reviews);

        if let Some(level) = lookup("RECPREP_LOG_LEVEL") {
            self.log_level = Some(level);
        }
        ignored
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min_rating.is_finite() || !self.max_rating.is_finite() {
            return Err(RecprepError::Config(
                "rating bounds must be finite numbers".to_string(),
            ));
        }
        if self.min_rating > self.max_rating {
            return Err(RecprepError::Config(format!(
                "min_rating ({}) is greater than max_rating ({})",
                self.min_rating, self.max_rating
            )));
        }
        if self.max_products == 0 || self.max_reviews == 0 {
            return Err(RecprepError::Config(
                "max_products and max_reviews must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve relative paths against `work_dir`
    pub fn resolve_paths(mut self, work_dir: &Path) -> Self {
        let resolve = |path: PathBuf| {
            if path.is_absolute() {
                path
            } else {
                work_dir.join(path)
            }
        };

        self.products_input = resolve(self.products_input);
        self.reviews_input = resolve(self.reviews_input);
        self.products_output = resolve(self.products_output);
        self.reviews_output = resolve(self.reviews_output);
        self.json_export_dir = self.json_export_dir.map(resolve);
        self
    }

    pub fn rating_range(&self) -> RatingRange {
        RatingRange::new(self.min_rating, self.max_rating)
    }
}
