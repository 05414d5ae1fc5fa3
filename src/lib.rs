//! errtour - a guided tour of recoverable error handling
//!
//! This library runs small demonstrations that each provoke an error (a type
//! mismatch, bad input, a missing file, division by zero) and recover from
//! it, then summarizes what happened in a report.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;

// Re-export commonly used types
pub use error::{
    ArithmeticError, ErrorSeverity, InputRejection, ResourceError, Result, ResultExt, TourError,
    handle_error, try_with_recovery,
};
pub use models::{
    config::{DemoKind, Settings},
    report::{DemoOutcome, OutcomeStatus, TourReport},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
