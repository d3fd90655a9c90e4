//! Application configuration
//!
//! Process-level settings that sit outside the pipeline configuration.

use anyhow::Result;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Working directory
    pub working_dir: PathBuf,
    /// Log filter taken from configuration, used when not verbose
    pub log_level_override: Option<String>,
}

impl AppConfig {
    /// Create a new application configuration rooted at the current directory
    pub fn new(verbose: u8) -> Result<Self> {
        let working_dir = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get current directory: {}", e))?;

        Ok(Self {
            verbose,
            working_dir,
            log_level_override: None,
        })
    }

    /// Set the working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set the configured log filter
    pub fn with_log_level(mut self, level: Option<String>) -> Self {
        self.log_level_override = level;
        self
    }

    /// Get the log filter based on verbosity
    ///
    /// `-v` flags win over a configured level.
    pub fn log_level(&self) -> String {
        match (self.verbose, &self.log_level_override) {
            (0, Some(level)) => level.clone(),
            (0, None) => "info".to_string(),
            (1, _) => "debug".to_string(),
            _ => "trace".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            working_dir: PathBuf::from("."),
            log_level_override: None,
        }
    }
}
