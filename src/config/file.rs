//! Configuration file and environment handling

use std::path::{Path, PathBuf};

use super::{ConfigSource, parser};
use crate::error::{Result, TourError};
use crate::models::config::{OutputFormat, PartialSettings};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".errtour.toml";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(TourError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
}

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if let Some(threshold) = self.var("THRESHOLD") {
            let threshold = threshold.trim().parse::<u64>().map_err(|e| {
                TourError::config_error(format!("{}_THRESHOLD must be a whole number: {}", self.prefix, e))
            })?;
            settings.threshold = Some(threshold);
        }

        if let Some(max_attempts) = self.var("MAX_ATTEMPTS") {
            let max_attempts = max_attempts.trim().parse::<usize>().map_err(|e| {
                TourError::config_error(format!("{}_MAX_ATTEMPTS must be a whole number: {}", self.prefix, e))
            })?;
            settings.max_attempts = Some(max_attempts);
        }

        if let Some(data_file) = self.var("DATA_FILE") {
            settings.data_file = Some(PathBuf::from(data_file));
        }

        if let Some(format) = self.var("OUTPUT_FORMAT") {
            settings.output_format = Some(format.parse::<OutputFormat>().map_err(TourError::config_error)?);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ["THRESHOLD", "MAX_ATTEMPTS", "DATA_FILE", "OUTPUT_FORMAT"]
            .iter()
            .any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
