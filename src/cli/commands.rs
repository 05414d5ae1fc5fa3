//! Command implementations

use std::io;
use std::path::Path;

use super::Args;
use crate::config::{self, CliArgs, FileConfig};
use crate::core::{ScriptedSource, StdinSource, TokenSource, Tour};
use crate::error::{ErrorSeverity, Result, ResultExt, TourError};
use crate::logging;
use crate::models::report::OutcomeStatus;
use crate::output::{Console, create_formatter, create_writer};

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Run the configured demonstrations
    Run(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Run(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Run(args) => {
                let settings = config::load_config(CliArgs::from_args(args))?;
                logging::init(settings.verbose);
                tracing::debug!(?settings, "resolved settings");

                let mut source: Box<dyn TokenSource> = if settings.reads_stdin() {
                    Box::new(StdinSource::stdin())
                } else {
                    Box::new(ScriptedSource::new(settings.scripted_input.iter().cloned()))
                };
                let mut console = Console::new(io::stdout(), settings.use_colors);

                let report = Tour::new(&settings).run(source.as_mut(), &mut console)?;

                let formatter = create_formatter(
                    settings.output_format,
                    settings.use_colors,
                    settings.verbose,
                    settings.quiet,
                );
                let content = formatter.format(&report)?;

                if !settings.quiet && settings.output_file.is_none() {
                    println!();
                }
                create_writer(settings.output_file.as_ref()).write(&content)?;

                let failed = report.count(OutcomeStatus::Failed);
                if failed > 0 {
                    return Err(TourError::Operation {
                        message: format!("{} of {} demonstrations failed", failed, report.outcomes.len()),
                    });
                }

                Ok(())
            }
            Command::Init => {
                let file_config = FileConfig::new();
                let config_path = file_config.path();

                if config_path.exists() && !config_path.is_file() {
                    return Err(TourError::InvalidPath {
                        path: config_path.to_path_buf(),
                    });
                }

                if config_path.exists() {
                    println!("Configuration file already exists at: {}", config_path.display());
                    println!("To overwrite it, delete the file first and run this command again.");
                    return Ok(());
                }

                file_config
                    .create_default()
                    .with_context(|| format!("Failed to create {}", config_path.display()))?;
                print_init_summary(config_path);

                Ok(())
            }
        }
    }

    /// Run the command and map its outcome to an exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                if let Some(suggestion) = err.suggestion() {
                    eprintln!("Suggestion: {}", suggestion);
                }

                exit_code(err.severity())
            }
        }
    }
}

/// Exit code for an error of the given severity
pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}

fn print_init_summary(config_path: &Path) {
    println!("Created default configuration file at: {}", config_path.display());
    println!("\nYou can now edit this file to configure errtour.");
    println!("\nConfiguration options:");
    println!("  - threshold: Running total at which the input loop stops");
    println!("  - max_attempts: Cap on the number of input tokens");
    println!("  - data_file: File read by the file demonstrations");
    println!("  - demos: Demonstrations to run, in order");
    println!("  - divisions: Operand pairs for the division demonstration");
    println!("  - output_format: Report format (text, json, csv)");
}
