//! Validated input accumulation
//!
//! Repeatedly asks a [`TokenSource`] for a number and adds it to a running
//! total until the total reaches a threshold. Tokens that do not parse and
//! tokens that are negative are reported and skipped; neither ends the loop.

use std::num::IntErrorKind;

use super::source::TokenSource;
use crate::error::{InputRejection, Result, TourError};
use crate::models::config::DEFAULT_PROMPT;
use crate::output::{Diagnostic, DiagnosticSink};
use tracing::{debug, info};

/// Number of rejections an [`Accumulation`] keeps for inspection
pub const REJECTION_SAMPLE: usize = 16;

/// Why an accumulation run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The running total reached the threshold
    ThresholdReached,
    /// The attempt cap was hit first
    AttemptsExhausted,
    /// The token source ran dry first
    InputExhausted,
}

/// Inspectable end state of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulation {
    pub total: u64,
    /// Tokens taken from the source, valid or not
    pub consumed: usize,
    pub accepted: Vec<u64>,
    /// Every rejected token is counted here
    pub rejected_count: usize,
    /// The first [`REJECTION_SAMPLE`] rejections
    pub rejected: Vec<InputRejection>,
    pub stop: StopReason,
}

impl Accumulation {
    fn new() -> Self {
        Self {
            total: 0,
            consumed: 0,
            accepted: Vec::new(),
            rejected_count: 0,
            rejected: Vec::new(),
            stop: StopReason::ThresholdReached,
        }
    }

    fn reject(&mut self, rejection: InputRejection) {
        self.rejected_count += 1;
        if self.rejected.len() < REJECTION_SAMPLE {
            self.rejected.push(rejection);
        }
    }
}

/// Interpret one raw token as a non-negative integer
///
/// Surrounding whitespace is ignored. Integers of any size are recognised:
/// a negative one is rejected as negative, and a positive one too large for
/// `u64` is clamped to `u64::MAX`.
pub fn validate_token(token: &str) -> std::result::Result<u64, InputRejection> {
    let trimmed = token.trim();
    let negative = || InputRejection::Negative {
        token: trimmed.to_string(),
    };

    match trimmed.parse::<i64>() {
        Ok(value) => u64::try_from(value).map_err(|_| negative()),
        Err(source) => match source.kind() {
            IntErrorKind::NegOverflow => Err(negative()),
            IntErrorKind::PosOverflow => Ok(trimmed.parse::<u64>().unwrap_or(u64::MAX)),
            _ => Err(InputRejection::NotANumber {
                token: token.to_string(),
                source,
            }),
        },
    }
}

/// Sums validated tokens until a threshold is reached
#[derive(Debug, Clone)]
pub struct Accumulator {
    threshold: u64,
    max_attempts: Option<usize>,
    prompt: String,
}

impl Accumulator {
    pub fn new(threshold: u64) -> Self {
        Self {
            threshold,
            max_attempts: None,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Stop after this many tokens even if the threshold was not reached
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Run the loop, recovering from every bad token locally
    pub fn run(&self, source: &mut dyn TokenSource, sink: &mut dyn DiagnosticSink) -> Result<Accumulation> {
        sink.emit(Diagnostic::info("[With Try-Except] Handling input gracefully"))?;

        let mut state = Accumulation::new();
        while let Some(token) = self.next(source, sink, &mut state)? {
            match validate_token(&token) {
                Ok(value) => self.accept(&mut state, value),
                Err(rejection) => self.reject(&mut state, sink, rejection)?,
            }
        }

        sink.emit(Diagnostic::info("Program finished"))?;
        Ok(state)
    }

    /// Run the loop without a local handler for parse failures
    ///
    /// Negative values are still turned away, but a token that is not a
    /// number escapes as `TourError::InvalidInput` and ends the run.
    pub fn run_unguarded(
        &self,
        source: &mut dyn TokenSource,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Accumulation> {
        sink.emit(Diagnostic::info("[Without Try-Except] Program may crash with invalid input"))?;

        let mut state = Accumulation::new();
        while let Some(token) = self.next(source, sink, &mut state)? {
            match validate_token(&token) {
                Ok(value) => self.accept(&mut state, value),
                Err(InputRejection::NotANumber { token, source }) => {
                    return Err(TourError::invalid_input(token, source));
                }
                Err(rejection) => self.reject(&mut state, sink, rejection)?,
            }
        }

        sink.emit(Diagnostic::info("Program finished"))?;
        Ok(state)
    }

    /// Fetch the next token, or record why the loop must stop
    fn next(
        &self,
        source: &mut dyn TokenSource,
        sink: &mut dyn DiagnosticSink,
        state: &mut Accumulation,
    ) -> Result<Option<String>> {
        if state.total >= self.threshold {
            state.stop = StopReason::ThresholdReached;
            info!(total = state.total, consumed = state.consumed, "threshold reached");
            return Ok(None);
        }

        if let Some(max) = self.max_attempts {
            if state.consumed >= max {
                state.stop = StopReason::AttemptsExhausted;
                info!(max, total = state.total, "attempt cap reached");
                sink.emit(Diagnostic::warning(format!(
                    "Giving up after {} attempts with a total of {}.",
                    max, state.total
                )))?;
                return Ok(None);
            }
        }

        match source.next_token(&self.prompt)? {
            Some(token) => {
                state.consumed += 1;
                Ok(Some(token))
            }
            None => {
                state.stop = StopReason::InputExhausted;
                info!(total = state.total, "input ended before the threshold");
                sink.emit(Diagnostic::warning(format!(
                    "No more input; stopping with a total of {}.",
                    state.total
                )))?;
                Ok(None)
            }
        }
    }

    fn accept(&self, state: &mut Accumulation, value: u64) {
        state.total = state.total.saturating_add(value);
        state.accepted.push(value);
        debug!(value, total = state.total, "token accepted");
    }

    fn reject(
        &self,
        state: &mut Accumulation,
        sink: &mut dyn DiagnosticSink,
        rejection: InputRejection,
    ) -> Result<()> {
        debug!(%rejection, "token rejected");
        sink.emit(Diagnostic::error(rejection.diagnostic()))?;
        state.reject(rejection);
        Ok(())
    }
}
