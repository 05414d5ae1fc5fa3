//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{Result, TourError};
use crate::models::config::PartialSettings;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TourError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| TourError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| TourError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if settings.threshold == Some(0) {
        return Err(TourError::config_error(format!(
            "Invalid threshold 0 in config file: {}. Must be at least 1.",
            path.display()
        )));
    }

    if settings.max_attempts == Some(0) {
        return Err(TourError::config_error(format!(
            "Invalid max_attempts 0 in config file: {}. Must be at least 1.",
            path.display()
        )));
    }

    if let Some(data_file) = &settings.data_file {
        if data_file.as_os_str().is_empty() {
            return Err(TourError::config_error(format!(
                "Invalid empty data_file in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(demos) = &settings.demos {
        if demos.is_empty() {
            return Err(TourError::config_error(format!(
                "Empty demos list in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(TourError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Locations searched for a configuration file, in order
pub fn default_config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        candidates.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("errtour").join("config.toml"));
    }

    candidates
}

/// Load the first existing file among `candidates`
pub fn find_config_in(candidates: &[PathBuf]) -> Result<Option<PartialSettings>> {
    match candidates.iter().find(|path| path.is_file()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using configuration file");
            Ok(Some(parse_config_file(path)?))
        }
        None => Ok(None),
    }
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    find_config_in(&default_config_candidates())
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(TourError::io_error)?;
        }
    }

    let default_config = include_str!("default_config.toml");

    fs::write(path, default_config).map_err(TourError::io_error)?;

    Ok(())
}
