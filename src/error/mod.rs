//! Error handling for errtour
//!
//! This module holds the closed error taxonomy used by every demonstration
//! (arithmetic, input validation, resource access) together with the
//! application-level `TourError`, its severity levels, and helpers that
//! report an error and decide whether the run can continue.

pub mod context;
pub mod types;

pub use context::{ResultExt, handle_error, try_with_recovery};
pub use types::{ArithmeticError, ErrorSeverity, InputRejection, ResourceError, Result, TourError};
