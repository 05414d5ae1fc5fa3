//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::models::config::{DemoKind, DivisionCase, OutputFormat};

/// errtour - a guided tour of recoverable error handling
#[derive(Parser, Debug)]
#[command(name = "errtour")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Walk through recoverable error handling: type mismatches, bad input, missing files, division by zero")]
#[command(long_about = "errtour runs a sequence of small demonstrations, each of which provokes an error \
and shows how it is recovered from: a type mismatch, success and cleanup branches, a validated input \
loop, a catch-all file read next to one that reports each failure kind, and division by zero. \
A summary report is printed at the end.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Run every demonstration, reading input from the terminal
    errtour

    # Feed the input loop without typing
    errtour --input 2 --input abc --input -1 --input 1

    # Stop the input loop once the total reaches 10
    errtour --threshold 10

    # Give up after 5 tokens whatever the total
    errtour --max-attempts 5

Choosing Demonstrations:
    # Only the division demonstration, with custom operands
    errtour --demo division --divide 9:3 --divide 1:0

    # See what happens without input validation
    errtour --demo unguarded-input --input 1 --input oops

    # Read a different file in the file demonstrations
    errtour --data-file notes.txt

Output Options:
    # Report in JSON format
    errtour --output json

    # Save a CSV report to a file
    errtour --output csv --output-file report.csv

    # Disable colored output
    errtour --no-colors

Configuration:
    # Use a specific configuration file
    errtour --config ./errtour.toml

    # Create a default configuration file
    errtour --init
")]
pub struct Args {
    /// Running total at which the input loop stops
    #[arg(short, long, value_name = "N", help = "Running total at which the validated input loop stops (default: 3)")]
    pub threshold: Option<u64>,

    /// Cap on the number of tokens the input loop consumes
    #[arg(long, value_name = "N", help = "Stop the input loop after N tokens, valid or not (no cap if not specified)")]
    pub max_attempts: Option<usize>,

    /// Prompt shown before each input request
    #[arg(long, value_name = "TEXT", help = "Prompt written before each input request (default: \"Add Counter: \")")]
    pub prompt: Option<String>,

    /// File read by the file demonstrations
    #[arg(short, long, value_name = "PATH", help = "File read by the catch-all and specific-catch demonstrations (default: data.txt)")]
    pub data_file: Option<PathBuf>,

    /// Demonstrations to run, in order
    #[arg(long, value_enum, value_name = "KIND", help = "Demonstration to run (can be specified multiple times; runs the default sequence if not specified)")]
    pub demo: Vec<DemoKind>,

    /// Operand pairs for the division demonstration
    #[arg(long, value_name = "A:B", allow_hyphen_values = true, help = "Dividend and divisor for the division demonstration (can be specified multiple times, e.g., --divide 10:0)")]
    pub divide: Vec<DivisionCase>,

    /// Scripted input tokens
    #[arg(short, long, value_name = "TOKEN", allow_hyphen_values = true, help = "Input token fed to the input loop instead of stdin (can be specified multiple times)")]
    pub input: Vec<String>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, help = "Report format: 'text' for human-readable output, 'json' for machine processing, 'csv' for spreadsheet analysis")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write the report to (uses stdout if not specified, e.g., --output-file ./report.json)")]
    pub output_file: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress demonstration banners and shorten the report to one line")]
    pub quiet: bool,

    /// Show detailed information
    #[arg(short, long, help = "Show run duration in the report and enable debug logging on stderr")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful for terminals that don't support ANSI colors or for piping output)")]
    pub no_colors: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .errtour.toml in the current directory if not specified)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.errtour.toml) in the current directory")]
    pub init: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
