//! Core demonstrations and the driver that sequences them

pub mod accumulator;
pub mod arithmetic;
pub mod resource;
pub mod source;
pub mod tour;

pub use accumulator::{Accumulation, Accumulator, REJECTION_SAMPLE, StopReason, validate_token};
pub use arithmetic::{Operand, checked_divide, divide, divide_and_report};
pub use resource::{catch_all_read, read_resource, specific_read};
pub use source::{ScriptedSource, StdinSource, TokenSource};
pub use tour::Tour;
