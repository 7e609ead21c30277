//! Configuration module for the toyc driver.
//!
//! Settings come from a `toyc.toml` file; every field has a default, so an
//! empty file and no file at all behave the same. Command-line flags are
//! applied on top by the binary.

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{DriverError, Result};
use crate::output::OutputFormat;
use crate::StopPolicy;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "toyc.toml";

/// Driver configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Log at debug level.
    #[serde(default)]
    pub verbose: bool,

    /// Scanning behaviour.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Token stream output.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[scan]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Stop at the first `ERROR` token instead of scanning to the end.
    #[serde(default = "default_true")]
    pub stop_on_error: bool,
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// `text` or `json`.
    #[serde(default)]
    pub format: OutputFormat,

    /// Colored log output.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            stop_on_error: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl ScanConfig {
    /// The stop policy this section selects.
    pub fn stop_policy(&self) -> StopPolicy {
        if self.stop_on_error {
            StopPolicy::FirstError
        } else {
            StopPolicy::Exhaust
        }
    }
}

impl Config {
    /// Load configuration, preferring `explicit` over the standard locations.
    ///
    /// An explicit path must exist. Otherwise searches the current
    /// directory, then the user configuration directory, and returns the
    /// default configuration if no file is found.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit.map(Path::to_path_buf).or_else(Self::find_config_file) {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - The loaded configuration or an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            DriverError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
            .map_err(|e| DriverError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in the user configuration directory.
    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("toyc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}
