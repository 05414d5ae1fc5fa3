//! Error types and definitions for errtour
//!
//! Every failure a demonstration can hit has its own closed enum here, so a
//! handler always knows which kind it is looking at. `TourError` covers the
//! application itself: configuration, terminal I/O and report output.

use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current demonstration fails but the tour continues
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Failures of a numeric operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArithmeticError {
    /// An operand of the wrong kind was supplied, e.g. text where a number is required
    #[error("unsupported operand kinds for division: {left} / {right}")]
    TypeMismatch {
        left: &'static str,
        right: &'static str,
    },

    /// The divisor was zero
    #[error("division by zero")]
    DivisionByZero,
}

/// Reasons a single input token is turned away by the accumulator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputRejection {
    /// The token is not an integer
    #[error("'{token}' is not a valid number: {source}")]
    NotANumber {
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// The token is an integer but violates the non-negative rule
    ///
    /// The text is kept rather than a number so values beyond `i64` fit too.
    #[error("{token} is negative")]
    Negative { token: String },
}

impl InputRejection {
    /// The line shown to the operator for this rejection
    pub fn diagnostic(&self) -> &'static str {
        match self {
            InputRejection::NotANumber { .. } => "[ValueError] That's not a valid number.",
            InputRejection::Negative { .. } => "Input must be a positive number!",
        }
    }
}

/// Failures when reading an external resource such as `data.txt`
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Nothing exists at the path
    #[error("resource not found: {path}")]
    NotFound { path: PathBuf },

    /// The path exists but cannot be opened
    #[error("permission denied reading {path}")]
    PermissionDenied { path: PathBuf },

    /// The content is not valid UTF-8 text
    #[error("{path} does not contain valid UTF-8 text")]
    NotText { path: PathBuf },

    /// Any other I/O failure, with the original error kept
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResourceError {
    /// Classify an I/O error raised while opening or reading `path`
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => ResourceError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => ResourceError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => ResourceError::NotText { path },
            _ => ResourceError::Io { path, source },
        }
    }

    /// Get an actionable message naming the exact failure
    pub fn user_message(&self) -> String {
        match self {
            ResourceError::NotFound { path } => {
                format!("[FileNotFoundError] '{}' not found. Please check the filename.", path.display())
            }
            ResourceError::PermissionDenied { path } => {
                format!("[PermissionError] '{}' cannot be opened. Check the file permissions.", path.display())
            }
            ResourceError::NotText { path } => {
                format!("[UnicodeDecodeError] '{}' is not a UTF-8 text file.", path.display())
            }
            ResourceError::Io { path, source } => {
                format!("[OSError] Failed to read '{}': {}", path.display(), source)
            }
        }
    }
}

/// Main error type for errtour operations
#[derive(Debug, Error)]
pub enum TourError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// A token that was not handled locally and escaped its loop
    #[error("Invalid input '{token}': {source}")]
    InvalidInput {
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// Reading from the input stream failed
    #[error("Error reading input: {source}")]
    InputRead {
        #[source]
        source: std::io::Error,
    },

    /// An operation failed, with context describing what was attempted
    #[error("{message}")]
    Operation { message: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Output directory not found
    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound { path: PathBuf },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// CSV output was not valid UTF-8
    #[error("CSV serialization error: {source}")]
    CsvSerialize {
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl TourError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - operation can continue
            TourError::InvalidPath { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            TourError::Config { .. } => ErrorSeverity::Critical,
            TourError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            TourError::ConfigRead { .. } => ErrorSeverity::Critical,
            TourError::ConfigParse { .. } => ErrorSeverity::Critical,
            TourError::StdoutWrite { .. } => ErrorSeverity::Critical,
            TourError::OutputWrite { .. } => ErrorSeverity::Critical,
            TourError::OutputDirectoryNotFound { .. } => ErrorSeverity::Critical,

            // Regular errors - current demonstration fails but the tour continues
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            TourError::InvalidInput { token, .. } => {
                format!("'{}' is not a valid number and nothing caught it, so the loop was abandoned.", token)
            }
            TourError::InputRead { source } => {
                format!("Could not read from the input stream: {}.", source)
            }
            TourError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create one with --init or drop the --config option.", path.display())
            }
            TourError::OutputDirectoryNotFound { path } => {
                format!("Output directory '{}' does not exist. Please create the directory or specify a different output path.", path.display())
            }
            TourError::InvalidPath { path } => {
                format!("Invalid path: '{}'.", path.display())
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Get a suggestion for fixing the error, if there is an obvious one
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            TourError::ConfigNotFound { .. } => {
                Some("Create a .errtour.toml file with --init or specify an existing file with --config")
            }
            TourError::ConfigParse { .. } => Some("Check the TOML syntax of the configuration file"),
            TourError::OutputDirectoryNotFound { .. } => {
                Some("Create the output directory first or specify a different path")
            }
            TourError::InvalidInput { .. } => Some("Enter whole numbers such as 1, 2 or 3"),
            _ => None,
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        TourError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        TourError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid input error for a token that failed to parse
    pub fn invalid_input(token: impl Into<String>, source: ParseIntError) -> Self {
        TourError::InvalidInput {
            token: token.into(),
            source,
        }
    }

    /// Create a stdout write error
    pub fn stdout_write(source: std::io::Error) -> Self {
        TourError::StdoutWrite { source }
    }
}

// Implement From for common error types
impl From<std::io::Error> for TourError {
    fn from(err: std::io::Error) -> Self {
        TourError::io_error(err)
    }
}

impl From<csv::Error> for TourError {
    fn from(err: csv::Error) -> Self {
        TourError::Csv { source: err }
    }
}

impl From<serde_json::Error> for TourError {
    fn from(err: serde_json::Error) -> Self {
        TourError::JsonSerialize { source: err }
    }
}

/// Result type alias for errtour operations
pub type Result<T> = std::result::Result<T, TourError>;
