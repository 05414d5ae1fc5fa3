//! Runs the configured demonstrations in order
//!
//! Every demonstration runs under [`try_with_recovery`]: an error that
//! escapes one is reported and recorded as a failure, and the next one
//! still runs. Only critical errors stop the tour.

use super::accumulator::Accumulator;
use super::arithmetic::{self, Operand};
use super::resource;
use super::source::TokenSource;
use crate::error::{Result, try_with_recovery};
use crate::models::config::{DemoKind, Settings};
use crate::models::report::{DemoOutcome, OutcomeStatus, TourReport};
use crate::output::Console;
use std::io::Write;
use tracing::info;

/// What a demonstration hands back to the driver
struct DemoResult {
    caught: bool,
    total: Option<u64>,
}

impl DemoResult {
    fn caught(caught: bool) -> Self {
        Self { caught, total: None }
    }
}

/// Sequences demonstrations and collects their outcomes
pub struct Tour<'a> {
    settings: &'a Settings,
}

impl<'a> Tour<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Run every configured demonstration
    pub fn run<W: Write>(&self, source: &mut dyn TokenSource, console: &mut Console<W>) -> Result<TourReport> {
        let mut report = TourReport::new();

        for &demo in &self.settings.demos {
            if !self.settings.quiet {
                console.banner(&format!("==== {} ====", demo))?;
            }
            info!(%demo, "starting demonstration");

            let result = try_with_recovery(|| self.run_demo(demo, source, console))?;
            let diagnostics = console.take_history();

            let outcome = match result {
                Some(DemoResult { caught, total }) => {
                    let status = if caught {
                        OutcomeStatus::Recovered
                    } else {
                        OutcomeStatus::Succeeded
                    };
                    let outcome = DemoOutcome::new(demo, status, diagnostics);
                    match total {
                        Some(total) => outcome.with_total(total),
                        None => outcome,
                    }
                }
                None => {
                    info!(%demo, "demonstration failed");
                    DemoOutcome::new(demo, OutcomeStatus::Failed, diagnostics)
                }
            };
            report.add_outcome(outcome);
        }

        report.finish();
        Ok(report)
    }

    fn run_demo<W: Write>(
        &self,
        demo: DemoKind,
        source: &mut dyn TokenSource,
        console: &mut Console<W>,
    ) -> Result<DemoResult> {
        let settings = self.settings;

        match demo {
            DemoKind::TypeMismatch => arithmetic::type_mismatch(console).map(DemoResult::caught),
            DemoKind::ElseFinally => {
                arithmetic::else_finally(&Operand::Number(8.0), &Operand::Number(2.0), console)
                    .map(DemoResult::caught)
            }
            DemoKind::ValidatedInput | DemoKind::UnguardedInput => {
                let accumulator = Accumulator::new(settings.threshold)
                    .with_max_attempts(settings.max_attempts)
                    .with_prompt(settings.prompt.as_str());

                let accumulation = if demo == DemoKind::ValidatedInput {
                    accumulator.run(source, console)?
                } else {
                    accumulator.run_unguarded(source, console)?
                };

                Ok(DemoResult {
                    caught: accumulation.rejected_count > 0,
                    total: Some(accumulation.total),
                })
            }
            DemoKind::CatchAll => {
                resource::catch_all_read(&settings.data_file, console).map(DemoResult::caught)
            }
            DemoKind::SpecificCatch => resource::specific_read(&settings.data_file, console)
                .map(|caught| DemoResult::caught(caught.is_some())),
            DemoKind::Division => {
                let mut caught = false;
                for case in &settings.divisions {
                    caught |= arithmetic::divide_and_report(case.dividend, case.divisor, console)?;
                }
                Ok(DemoResult::caught(caught))
            }
        }
    }
}
