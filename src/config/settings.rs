//! Validation of fully resolved settings

use std::path::Path;

use crate::error::{Result, TourError};
use crate::models::config::Settings;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if settings.threshold == 0 {
            return Err(TourError::config_error("Threshold must be at least 1"));
        }

        if settings.max_attempts == Some(0) {
            return Err(TourError::config_error("Max attempts must be at least 1"));
        }

        if settings.data_file.as_os_str().is_empty() {
            return Err(TourError::config_error("Data file path must not be empty"));
        }

        if settings.demos.is_empty() {
            return Err(TourError::config_error("At least one demonstration must be selected"));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// The report file's directory has to exist already
    fn validate_output_path(path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(TourError::config_error("Output file path must not be empty"));
        }

        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(TourError::OutputDirectoryNotFound {
                    path: parent.to_path_buf(),
                })
            }
            _ => Ok(()),
        }
    }
}
