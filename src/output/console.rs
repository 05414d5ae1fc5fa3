//! Line-oriented diagnostics
//!
//! Demonstrations never print directly. They hand `Diagnostic`s to a
//! `DiagnosticSink`, which lets the driver show them on the terminal and
//! keep them for the end-of-run report at the same time.

use crate::error::{Result, TourError};
use ansi_term::Colour::{Cyan, Green, Red, Yellow};
use ansi_term::Style;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Kind of diagnostic line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Plain status output
    Info,
    /// The success branch of an operation
    Success,
    /// A recoverable condition that does not count as an error
    Warning,
    /// A caught error
    Error,
    /// Output of a step that runs on every exit path
    Cleanup,
}

/// One line of operator-facing output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: Level,
    pub text: String,
}

impl Diagnostic {
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Level::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Level::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Level::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Level::Error, text)
    }

    pub fn cleanup(text: impl Into<String>) -> Self {
        Self::new(Level::Cleanup, text)
    }

    /// Render the line, colored by level when asked
    pub fn render(&self, use_colors: bool) -> String {
        if !use_colors {
            return self.text.clone();
        }
        match self.level {
            Level::Info => self.text.clone(),
            Level::Success => Green.paint(self.text.as_str()).to_string(),
            Level::Warning => Yellow.paint(self.text.as_str()).to_string(),
            Level::Error => Red.paint(self.text.as_str()).to_string(),
            Level::Cleanup => Style::new().dimmed().paint(self.text.as_str()).to_string(),
        }
    }
}

/// Destination for diagnostics
pub trait DiagnosticSink {
    /// Emit one diagnostic line
    fn emit(&mut self, diagnostic: Diagnostic) -> Result<()>;
}

/// Writes diagnostics to a stream and remembers them
///
/// The history is drained by the driver after each demonstration.
pub struct Console<W: Write> {
    out: W,
    use_colors: bool,
    history: Vec<Diagnostic>,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, use_colors: bool) -> Self {
        Self {
            out,
            use_colors,
            history: Vec::new(),
        }
    }

    /// Diagnostics emitted since the last `take_history`
    pub fn history(&self) -> &[Diagnostic] {
        &self.history
    }

    pub fn take_history(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.history)
    }

    /// Write a line that is not part of any demonstration's history
    pub fn banner(&mut self, text: &str) -> Result<()> {
        let line = if self.use_colors {
            Cyan.bold().paint(text).to_string()
        } else {
            text.to_string()
        };
        writeln!(self.out, "{}", line).map_err(TourError::stdout_write)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiagnosticSink for Console<W> {
    fn emit(&mut self, diagnostic: Diagnostic) -> Result<()> {
        writeln!(self.out, "{}", diagnostic.render(self.use_colors)).map_err(TourError::stdout_write)?;
        self.out.flush().map_err(TourError::stdout_write)?;
        self.history.push(diagnostic);
        Ok(())
    }
}

/// Collects diagnostics without writing them anywhere
#[derive(Debug, Default)]
pub struct Transcript {
    pub lines: Vec<Diagnostic>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts of all collected lines
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|d| d.text.as_str()).collect()
    }

    /// Number of lines with the given level
    pub fn count(&self, level: Level) -> usize {
        self.lines.iter().filter(|d| d.level == level).count()
    }
}

impl DiagnosticSink for Transcript {
    fn emit(&mut self, diagnostic: Diagnostic) -> Result<()> {
        self.lines.push(diagnostic);
        Ok(())
    }
}
