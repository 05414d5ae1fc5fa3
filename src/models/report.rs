//! Tour result structures

use super::config::DemoKind;
use crate::output::Diagnostic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a demonstration ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    /// Ran to completion without hitting an error
    Succeeded,
    /// Hit one or more errors and handled them locally
    Recovered,
    /// An error escaped the demonstration and was handled by the driver
    Failed,
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeStatus::Succeeded => write!(f, "succeeded"),
            OutcomeStatus::Recovered => write!(f, "recovered"),
            OutcomeStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Result of a single demonstration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoOutcome {
    pub demo: DemoKind,
    pub status: OutcomeStatus,
    /// Everything the demonstration printed, in order
    pub diagnostics: Vec<Diagnostic>,
    /// Final running total, for the input demonstrations
    pub total: Option<u64>,
}

impl DemoOutcome {
    pub fn new(demo: DemoKind, status: OutcomeStatus, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            demo,
            status,
            diagnostics,
            total: None,
        }
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// The last line the demonstration emitted, if any
    pub fn last_message(&self) -> Option<&str> {
        self.diagnostics.last().map(|d| d.text.as_str())
    }
}

/// Results of a whole tour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub outcomes: Vec<DemoOutcome>,
}

impl TourReport {
    /// Create an empty report stamped with the current time
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            outcomes: Vec::new(),
        }
    }

    pub fn add_outcome(&mut self, outcome: DemoOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Number of outcomes with the given status
    pub fn count(&self, status: OutcomeStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn outcome(&self, demo: DemoKind) -> Option<&DemoOutcome> {
        self.outcomes.iter().find(|o| o.demo == demo)
    }

    /// Wall-clock time between start and finish, if finished
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|end| end - self.started_at)
    }
}

impl Default for TourReport {
    fn default() -> Self {
        Self::new()
    }
}
