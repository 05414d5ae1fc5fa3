//! Reading an external file
//!
//! [`read_resource`] classifies every failure into a [`ResourceError`]
//! kind. The two demonstrations built on it differ only in how they treat
//! that error: one names the exact problem, the other throws the kind away.

use crate::error::ResourceError;
use crate::error::Result;
use crate::output::{Diagnostic, DiagnosticSink};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

/// Generic message of the catch-all demonstration
pub const CATCH_ALL_MESSAGE: &str = "[General Except] Something went wrong (but unclear what).";

/// Read a whole file as UTF-8 text
///
/// The handle lives only inside this function, so it is closed on every
/// exit path.
pub fn read_resource(path: &Path) -> std::result::Result<String, ResourceError> {
    let mut file = File::open(path).map_err(|e| ResourceError::from_io(path, e))?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| ResourceError::from_io(path, e))?;

    debug!(path = %path.display(), bytes = content.len(), "read resource");
    Ok(content)
}

/// Read the file and report each failure kind with its own message
///
/// Returns the error kind that was caught, if any.
pub fn specific_read(path: &Path, sink: &mut dyn DiagnosticSink) -> Result<Option<ResourceError>> {
    match read_resource(path) {
        Ok(content) => {
            sink.emit(Diagnostic::info(content.trim_end()))?;
            Ok(None)
        }
        Err(err) => {
            sink.emit(Diagnostic::error(err.user_message()))?;
            Ok(Some(err))
        }
    }
}

/// Read the file and report every failure with the same opaque message
///
/// This is the contrast case: the caller cannot tell a missing file from a
/// permission problem. Returns whether anything went wrong.
pub fn catch_all_read(path: &Path, sink: &mut dyn DiagnosticSink) -> Result<bool> {
    match read_resource(path) {
        Ok(content) => {
            sink.emit(Diagnostic::info(content.trim_end()))?;
            Ok(false)
        }
        Err(err) => {
            trace!(error = %err, "discarding error kind");
            sink.emit(Diagnostic::error(CATCH_ALL_MESSAGE))?;
            Ok(true)
        }
    }
}
