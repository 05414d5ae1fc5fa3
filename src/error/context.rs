//! Error context utilities for errtour
//!
//! This module provides utilities for adding context to errors and for
//! deciding, from an error's severity, whether a run may carry on.

use crate::error::{ErrorSeverity, Result, TourError};

/// Extension trait for Result to add context to errors
pub trait ResultExt<T> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| {
            // Keep the variant so severity and suggestions survive; only
            // anonymous failures get wrapped.
            match err {
                TourError::Io { source } => TourError::Operation {
                    message: format!("{}: {}", context(), source),
                },
                other => other,
            }
        })
    }
}

/// Handle an error based on its severity
///
/// - Warning: Report the error and return None
/// - Error: Report the error and return None
/// - Critical: Report the error and return Some(error)
pub fn handle_error(err: TourError) -> Option<TourError> {
    let severity = err.severity();
    let message = err.user_message();
    tracing::debug!(%severity, error = %err, "handling error");

    match severity {
        ErrorSeverity::Warning => {
            eprintln!("Warning: {}", message);
            None
        }
        ErrorSeverity::Error => {
            eprintln!("Error: {}", message);
            None
        }
        ErrorSeverity::Critical => {
            eprintln!("Critical Error: {}", message);
            Some(err)
        }
    }
}

/// Try to run a function and handle any errors based on their severity
///
/// Returns Ok(Some(T)) if the function succeeds, Ok(None) if it failed with a
/// non-critical error (already reported), or Err if the error is critical.
pub fn try_with_recovery<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            if let Some(critical_err) = handle_error(err) {
                Err(critical_err)
            } else {
                Ok(None)
            }
        }
    }
}
