use super::{IgnoredEnvVar, PipelineConfig};
use crate::error::{RecprepError, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "recprep.toml";

/// Result of layering file and environment configuration
///
/// Loading runs before logging is initialized, so anything worth reporting
/// is carried here for the caller to log.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: PipelineConfig,
    /// The TOML file that was read, if any
    pub source: Option<PathBuf>,
    pub ignored_env: Vec<IgnoredEnvVar>,
}

/// Load configuration for a run rooted at `work_dir`
///
/// An `explicit` file must exist. Without one, `recprep.toml` in
/// `work_dir` is used if present, otherwise defaults. Environment
/// overrides are applied last.
pub fn load_config(work_dir: &Path, explicit: Option<&Path>) -> Result<LoadedConfig> {
    let source = match explicit {
        Some(path) => {
            let path = work_dir.join(path);
            if !path.exists() {
                return Err(RecprepError::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            Some(path)
        }
        None => Some(work_dir.join(DEFAULT_CONFIG_FILE)).filter(|path| path.exists()),
    };

    let mut config = match &source {
        Some(path) => read_config_file(path)?,
        None => PipelineConfig::default(),
    };
    let ignored_env = config.merge_env_vars();

    Ok(LoadedConfig {
        config,
        source,
        ignored_env,
    })
}

fn read_config_file(path: &Path) -> Result<PipelineConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| RecprepError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| RecprepError::Toml {
        path: path.to_path_buf(),
        source,
    })
}
