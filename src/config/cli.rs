//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::Args;
use crate::error::Result;
use crate::models::config::{DemoKind, DivisionCase, OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
}

/// Command-line arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub threshold: Option<u64>,
    pub max_attempts: Option<usize>,
    pub prompt: Option<String>,
    pub data_file: Option<PathBuf>,
    pub demos: Option<Vec<DemoKind>>,
    pub divisions: Option<Vec<DivisionCase>>,
    pub inputs: Option<Vec<String>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed clap arguments
    pub fn from_args(args: &Args) -> Self {
        fn non_empty<T: Clone>(values: &[T]) -> Option<Vec<T>> {
            if values.is_empty() {
                None
            } else {
                Some(values.to_vec())
            }
        }

        Self {
            threshold: args.threshold,
            max_attempts: args.max_attempts,
            prompt: args.prompt.clone(),
            data_file: args.data_file.clone(),
            demos: non_empty(&args.demo),
            divisions: non_empty(&args.divide),
            inputs: non_empty(&args.input),
            output_format: args.output,
            output_file: args.output_file.clone(),
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from_args(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            threshold: self.args.threshold,
            max_attempts: self.args.max_attempts,
            prompt: self.args.prompt.clone(),
            data_file: self.args.data_file.clone(),
            demos: self.args.demos.clone(),
            divisions: self.args.divisions.clone(),
            scripted_input: self.args.inputs.clone(),
            output_format: self.args.output_format,
            output_file: self.args.output_file.clone(),
            ..Default::default()
        };

        // Boolean flags only ever switch away from the default
        if self.args.quiet {
            settings.quiet = Some(true);
        }

        if self.args.verbose {
            settings.verbose = Some(true);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        // CLI args are always available
        true
    }

    fn name(&self) -> &str {
        &self.name
    }
}
