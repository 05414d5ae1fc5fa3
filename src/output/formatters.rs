//! Report formatting functionality
//!
//! This module provides formatters for the end-of-run tour report.

use crate::error::{Result, TourError};
use crate::models::report::{DemoOutcome, OutcomeStatus, TourReport};
use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;

/// Format a single demonstration outcome as text
pub fn format_outcome_text(outcome: &DemoOutcome, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    let status = outcome.status.to_string();
    let status = if use_colors {
        match outcome.status {
            OutcomeStatus::Succeeded => Green.paint(status).to_string(),
            OutcomeStatus::Recovered => Yellow.paint(status).to_string(),
            OutcomeStatus::Failed => Red.paint(status).to_string(),
        }
    } else {
        status
    };

    output.push_str(&format!("  {:<16} {}", outcome.demo.name(), status));
    if let Some(total) = outcome.total {
        output.push_str(&format!(" (total {})", total));
    }
    output.push('\n');

    if verbose {
        for diagnostic in &outcome.diagnostics {
            let line = format!("      {}", diagnostic.text);
            if use_colors {
                output.push_str(&Style::new().dimmed().paint(line).to_string());
            } else {
                output.push_str(&line);
            }
            output.push('\n');
        }
    }

    output
}

/// Format a tour report as text
pub fn format_report_text(report: &TourReport, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    // Summary header
    if use_colors {
        output.push_str(&format!("{}\n", Blue.bold().paint("Tour Summary")));
    } else {
        output.push_str("Tour Summary\n");
    }

    for outcome in &report.outcomes {
        output.push_str(&format_outcome_text(outcome, use_colors, verbose));
    }

    output.push_str(&format!(
        "\nDemonstrations: {}, succeeded: {}, recovered: {}, failed: {}\n",
        report.outcomes.len(),
        report.count(OutcomeStatus::Succeeded),
        report.count(OutcomeStatus::Recovered),
        report.count(OutcomeStatus::Failed),
    ));

    if verbose {
        if let Some(duration) = report.duration() {
            output.push_str(&format!("Duration: {}ms\n", duration.num_milliseconds()));
        }
    }

    output
}

/// Format a tour report as JSON
pub fn format_report_json(report: &TourReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    json.map_err(|e| TourError::JsonSerialize { source: e })
}

/// Format a tour report as CSV, one row per demonstration
pub fn format_report_csv(report: &TourReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    // Write header row
    writer.write_record(["Demo", "Status", "Diagnostics", "Total", "Last Message"])?;

    // Write data rows
    for outcome in &report.outcomes {
        let total = match outcome.total {
            Some(total) => total.to_string(),
            None => "".to_string(),
        };

        let status = outcome.status.to_string();
        let count = outcome.diagnostics.len().to_string();

        writer.write_record([
            outcome.demo.name(),
            status.as_str(),
            count.as_str(),
            total.as_str(),
            outcome.last_message().unwrap_or(""),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        TourError::io_error(std::io::Error::new(e.error().kind(), e.error().to_string()))
    })?;

    // Get the CSV data as a string
    String::from_utf8(bytes).map_err(|e| TourError::CsvSerialize { source: e })
}
