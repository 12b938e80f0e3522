use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SweepError};

/// Environment variable naming the snapshot directory.
pub const DIR_ENV: &str = "SNAPSWEEP_DIR";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SNAPSWEEP_CONFIG";

/// Snapshots older than this are removed.
pub const DEFAULT_RETENTION: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub directory: PathBuf,
    pub retention: Duration,
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub directory: Option<PathBuf>,
}

impl Config {
    /// Builds a config for `directory` with the default retention window.
    /// Rejects an empty or blank path.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        if directory.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(SweepError::Config(
                "snapshot directory path is empty".to_string(),
            ));
        }

        Ok(Config {
            directory,
            retention: DEFAULT_RETENTION,
        })
    }

    /// Resolves the config from the environment, falling back to the config file.
    /// The file is not read at all when the environment variable is set.
    pub fn load() -> Result<Self> {
        if let Some(dir) = std::env::var_os(DIR_ENV) {
            return Self::new(dir);
        }

        let file = match config_file_path() {
            Some(path) => read_file_config(&path)?,
            None => None,
        };

        Self::from_sources(None, file)
    }

    /// The environment value wins whenever it is set, even when empty, so a
    /// blanked variable is reported rather than silently overridden.
    pub fn from_sources(env_dir: Option<OsString>, file: Option<FileConfig>) -> Result<Self> {
        if let Some(dir) = env_dir {
            return Self::new(dir);
        }

        match file.and_then(|f| f.directory) {
            Some(dir) => Self::new(dir),
            None => Err(SweepError::Config(format!(
                "no snapshot directory configured; set {DIR_ENV} or `directory` in config.toml"
            ))),
        }
    }
}

/// `$SNAPSWEEP_CONFIG`, or `config.toml` in the platform config dir
/// (~/.config/snapsweep on Linux).
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    directories::ProjectDirs::from("", "", "snapsweep")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Reads a config file. A missing file is not an error.
pub fn read_file_config(path: &Path) -> Result<Option<FileConfig>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(SweepError::Config(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        }
    };

    toml::from_str(&text)
        .map(Some)
        .map_err(|e| SweepError::Config(format!("failed to parse {}: {e}", path.display())))
}
