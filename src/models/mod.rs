//! Data models and structures for errtour

pub mod config;
pub mod report;

pub use config::{DemoKind, DivisionCase, OutputFormat, PartialSettings, Settings};
pub use report::{DemoOutcome, OutcomeStatus, TourReport};
