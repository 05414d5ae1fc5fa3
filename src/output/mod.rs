//! Output formatting and writing functionality

mod console;
mod formatters;
mod writers;

pub use self::console::{Console, Diagnostic, DiagnosticSink, Level, Transcript};
pub use self::writers::{FileWriter, OutputWriter, StdoutWriter, create_writer};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::report::{OutcomeStatus, TourReport};

/// Trait for different report formatters
pub trait Formatter {
    /// Format a tour report into a string
    fn format(&self, report: &TourReport) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &TourReport) -> Result<String> {
        // In quiet mode, only a one-line tally
        if self.quiet {
            return Ok(format!(
                "Demonstrations: {}, failed: {}\n",
                report.outcomes.len(),
                report.count(OutcomeStatus::Failed)
            ));
        }

        Ok(formatters::format_report_text(report, self.use_colors, self.verbose))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &TourReport) -> Result<String> {
        formatters::format_report_json(report, self.pretty)
    }
}

/// CSV formatter for spreadsheet analysis
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, report: &TourReport) -> Result<String> {
        formatters::format_report_csv(report)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(
    format: OutputFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
