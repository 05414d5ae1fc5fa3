//! Division demonstrations
//!
//! Three small shows of the same idea: an arithmetic failure is a value of
//! type [`ArithmeticError`], matched where it happens, and any step that
//! must always run is placed after the match so every branch reaches it.

use crate::error::{ArithmeticError, Result};
use crate::output::{Diagnostic, DiagnosticSink};
use tracing::debug;

/// A dynamically typed operand
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Number(f64),
    Text(String),
}

impl Operand {
    fn kind(&self) -> &'static str {
        match self {
            Operand::Number(_) => "int",
            Operand::Text(_) => "str",
        }
    }
}

/// Divide two numbers
pub fn divide(dividend: f64, divisor: f64) -> std::result::Result<f64, ArithmeticError> {
    if divisor == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(dividend / divisor)
}

/// Divide two operands, failing if either one is not a number
pub fn checked_divide(left: &Operand, right: &Operand) -> std::result::Result<f64, ArithmeticError> {
    match (left, right) {
        (Operand::Number(a), Operand::Number(b)) => divide(*a, *b),
        _ => Err(ArithmeticError::TypeMismatch {
            left: left.kind(),
            right: right.kind(),
        }),
    }
}

/// Render a quotient the way a float is usually shown, `5.0` rather than `5`
pub fn format_quotient(value: f64) -> String {
    format!("{:?}", value)
}

/// Divide the text `"8"` by `2` and report the mismatch
///
/// Returns whether an error was caught.
pub fn type_mismatch(sink: &mut dyn DiagnosticSink) -> Result<bool> {
    let left = Operand::Text("8".to_string());
    let right = Operand::Number(2.0);

    match checked_divide(&left, &right) {
        Ok(value) => {
            sink.emit(Diagnostic::success(format!("Result is: {}", format_quotient(value))))?;
            Ok(false)
        }
        Err(err @ ArithmeticError::TypeMismatch { .. }) => {
            debug!(%err, "caught type mismatch");
            sink.emit(Diagnostic::error("[TypeError] You can't divide a string by a number!"))?;
            Ok(true)
        }
        Err(err) => {
            sink.emit(Diagnostic::error(format!("[ArithmeticError] {}", err)))?;
            Ok(true)
        }
    }
}

/// Divide `left` by `right` with distinct success, failure and cleanup steps
///
/// Returns whether an error was caught.
pub fn else_finally(left: &Operand, right: &Operand, sink: &mut dyn DiagnosticSink) -> Result<bool> {
    let caught = match checked_divide(left, right) {
        Ok(value) => {
            sink.emit(Diagnostic::success(format!(
                "[Success] Division successful: {}",
                format_quotient(value)
            )))?;
            false
        }
        Err(ArithmeticError::TypeMismatch { .. }) => {
            sink.emit(Diagnostic::error("[TypeError] Something went wrong with division."))?;
            true
        }
        Err(err @ ArithmeticError::DivisionByZero) => {
            sink.emit(Diagnostic::error(format!("[ZeroDivisionError] {}", err)))?;
            true
        }
    };

    sink.emit(Diagnostic::cleanup("[Finally] This block always runs."))?;
    Ok(caught)
}

/// Divide and report, ending with a completion line on every path
///
/// Returns whether an error was caught.
pub fn divide_and_report(dividend: f64, divisor: f64, sink: &mut dyn DiagnosticSink) -> Result<bool> {
    let caught = match divide(dividend, divisor) {
        Ok(value) => {
            sink.emit(Diagnostic::success(format!("Result is: {}", format_quotient(value))))?;
            false
        }
        Err(_) => {
            sink.emit(Diagnostic::error("[ZeroDivisionError] Cannot divide by zero."))?;
            true
        }
    };

    sink.emit(Diagnostic::cleanup("Operation complete"))?;
    Ok(caught)
}
