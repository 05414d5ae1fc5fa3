//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default running-total threshold for the validated input loop
pub const DEFAULT_THRESHOLD: u64 = 3;

/// Default prompt shown before each input request
pub const DEFAULT_PROMPT: &str = "Add Counter: ";

/// Default file read by the resource demonstrations
pub const DEFAULT_DATA_FILE: &str = "data.txt";

/// Main configuration settings for errtour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Running total at which the validated input loop stops
    pub threshold: u64,

    /// Optional cap on the number of tokens the input loop will consume
    pub max_attempts: Option<usize>,

    /// Prompt written before each input request
    pub prompt: String,

    /// File read by the resource demonstrations
    pub data_file: PathBuf,

    /// Demonstrations to run, in order
    pub demos: Vec<DemoKind>,

    /// Operand pairs for the division demonstration
    pub divisions: Vec<DivisionCase>,

    /// Pre-supplied input tokens; when empty, input is read from stdin
    pub scripted_input: Vec<String>,

    /// Report format (text, json, csv)
    pub output_format: OutputFormat,

    /// Report file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to suppress the banner and shorten the report
    pub quiet: bool,

    /// Whether to show extra detail and debug logging
    pub verbose: bool,

    /// Whether to use colors in terminal output
    pub use_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_attempts: None,
            prompt: DEFAULT_PROMPT.to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            demos: DemoKind::default_sequence(),
            divisions: vec![DivisionCase::new(10.0, 2.0), DivisionCase::new(10.0, 0.0)],
            scripted_input: Vec::new(),
            output_format: OutputFormat::Text,
            output_file: None,
            quiet: false,
            verbose: false,
            use_colors: true,
        }
    }
}

impl Settings {
    /// Whether the run will prompt on stdin
    ///
    /// True only when no tokens were scripted and an input demonstration is
    /// configured.
    pub fn reads_stdin(&self) -> bool {
        self.scripted_input.is_empty() && self.demos.iter().any(DemoKind::needs_input)
    }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// The individual error-handling demonstrations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DemoKind {
    /// Dividing text by a number, caught as a type mismatch
    TypeMismatch,
    /// A successful division with success and cleanup branches
    ElseFinally,
    /// The validated input loop that recovers from bad tokens
    ValidatedInput,
    /// The same loop with parse failures left to propagate
    UnguardedInput,
    /// Reading the data file with every failure collapsed into one message
    CatchAll,
    /// Reading the data file with each failure kind reported on its own
    SpecificCatch,
    /// Division with a zero-divisor branch and cleanup
    Division,
}

impl DemoKind {
    /// The sequence run when nothing else is configured
    pub fn default_sequence() -> Vec<DemoKind> {
        vec![
            DemoKind::TypeMismatch,
            DemoKind::ElseFinally,
            DemoKind::ValidatedInput,
            DemoKind::CatchAll,
            DemoKind::SpecificCatch,
            DemoKind::Division,
        ]
    }

    /// Stable kebab-case name, as used in config files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            DemoKind::TypeMismatch => "type-mismatch",
            DemoKind::ElseFinally => "else-finally",
            DemoKind::ValidatedInput => "validated-input",
            DemoKind::UnguardedInput => "unguarded-input",
            DemoKind::CatchAll => "catch-all",
            DemoKind::SpecificCatch => "specific-catch",
            DemoKind::Division => "division",
        }
    }

    /// Whether this demonstration reads input tokens
    pub fn needs_input(&self) -> bool {
        matches!(self, DemoKind::ValidatedInput | DemoKind::UnguardedInput)
    }
}

impl std::fmt::Display for DemoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One dividend/divisor pair for the division demonstration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DivisionCase {
    pub dividend: f64,
    pub divisor: f64,
}

impl DivisionCase {
    pub fn new(dividend: f64, divisor: f64) -> Self {
        Self { dividend, divisor }
    }
}

impl std::str::FromStr for DivisionCase {
    type Err = String;

    /// Parses `DIVIDEND:DIVISOR`, e.g. `10:2`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dividend, divisor) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid division '{}': expected DIVIDEND:DIVISOR", s))?;

        let dividend = dividend
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid dividend '{}': {}", dividend, e))?;
        let divisor = divisor
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid divisor '{}': {}", divisor, e))?;

        Ok(DivisionCase::new(dividend, divisor))
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialSettings {
    pub threshold: Option<u64>,
    pub max_attempts: Option<usize>,
    pub prompt: Option<String>,
    pub data_file: Option<PathBuf>,
    pub demos: Option<Vec<DemoKind>>,
    pub divisions: Option<Vec<DivisionCase>>,
    pub scripted_input: Option<Vec<String>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.threshold.is_some() {
            self.threshold = other.threshold;
        }
        if other.max_attempts.is_some() {
            self.max_attempts = other.max_attempts;
        }
        if other.prompt.is_some() {
            self.prompt = other.prompt;
        }
        if other.data_file.is_some() {
            self.data_file = other.data_file;
        }
        if other.demos.is_some() {
            self.demos = other.demos;
        }
        if other.divisions.is_some() {
            self.divisions = other.divisions;
        }
        if other.scripted_input.is_some() {
            self.scripted_input = other.scripted_input;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(threshold) = self.threshold {
            settings.threshold = threshold;
        }
        if let Some(max_attempts) = self.max_attempts {
            settings.max_attempts = Some(max_attempts);
        }
        if let Some(prompt) = &self.prompt {
            settings.prompt = prompt.clone();
        }
        if let Some(data_file) = &self.data_file {
            settings.data_file = data_file.clone();
        }
        if let Some(demos) = &self.demos {
            settings.demos = demos.clone();
        }
        if let Some(divisions) = &self.divisions {
            settings.divisions = divisions.clone();
        }
        if let Some(scripted_input) = &self.scripted_input {
            settings.scripted_input = scripted_input.clone();
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }

        settings
    }
}
