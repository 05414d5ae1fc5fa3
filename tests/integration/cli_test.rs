use std::fs;
use std::path::PathBuf;

use clap::Parser;
use errtour::{
    cli::{Args, Command},
    config::{load_config_with_env_prefix, CliArgs},
    models::config::{DemoKind, DivisionCase, OutputFormat},
};
use tempfile::tempdir;

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["errtour"]);
    assert_eq!(args.threshold, None);
    assert_eq!(args.max_attempts, None);
    assert!(args.demo.is_empty());
    assert!(args.divide.is_empty());
    assert_eq!(args.output, None);
    assert_eq!(args.output_file, None);
    assert!(!args.quiet);
    assert!(!args.verbose);
    assert!(!args.no_colors);

    let args = Args::parse_from([
        "errtour",
        "--threshold", "7",
        "--max-attempts", "4",
        "--prompt", "> ",
        "--data-file", "notes.txt",
        "--demo", "catch-all",
        "--demo", "specific-catch",
        "--divide", "7:2",
        "--output", "json",
        "--output-file", "report.json",
        "--no-colors",
        "--verbose",
    ]);

    assert_eq!(args.threshold, Some(7));
    assert_eq!(args.max_attempts, Some(4));
    assert_eq!(args.prompt.as_deref(), Some("> "));
    assert_eq!(args.data_file, Some(PathBuf::from("notes.txt")));
    assert_eq!(args.demo, vec![DemoKind::CatchAll, DemoKind::SpecificCatch]);
    assert_eq!(args.divide, vec![DivisionCase::new(7.0, 2.0)]);
    assert_eq!(args.output, Some(OutputFormat::Json));
    assert_eq!(args.output_file, Some(PathBuf::from("report.json")));
    assert!(args.no_colors);
    assert!(args.verbose);
}

#[test]
fn test_cli_output_formats() {
    for (flag, expected) in [
        ("text", OutputFormat::Text),
        ("json", OutputFormat::Json),
        ("csv", OutputFormat::Csv),
    ] {
        let args = Args::parse_from(["errtour", "--output", flag]);
        assert_eq!(args.output, Some(expected));
    }

    assert!(Args::try_parse_from(["errtour", "--output", "xml"]).is_err());
}

#[test]
fn test_cli_init_command() {
    let args = Args::parse_from(["errtour", "--init"]);
    assert!(matches!(Command::from_args(args), Command::Init));
}

#[test]
fn test_cli_overrides_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("errtour.toml");
    fs::write(
        &config_path,
        "threshold = 9\nprompt = \"Number: \"\ndemos = [\"division\"]\n",
    )
    .unwrap();

    let args = Args::parse_from([
        "errtour",
        "--config",
        config_path.to_str().unwrap(),
        "--threshold",
        "4",
        "--input",
        "-1",
        "--input",
        "4",
    ]);

    let settings = load_config_with_env_prefix(CliArgs::from_args(&args), "ERRTOUR_CLI_TEST").unwrap();

    assert_eq!(settings.threshold, 4);
    assert_eq!(settings.prompt, "Number: ");
    assert_eq!(settings.demos, vec![DemoKind::Division]);
    assert_eq!(settings.scripted_input, vec!["-1".to_string(), "4".to_string()]);
}

#[test]
fn test_cli_rejects_missing_output_directory() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("errtour.toml");
    fs::write(&config_path, "demos = [\"division\"]\n").unwrap();
    let output = dir.path().join("no").join("report.txt");

    let args = Args::parse_from([
        "errtour",
        "--config",
        config_path.to_str().unwrap(),
        "--output-file",
        output.to_str().unwrap(),
    ]);

    // Critical configuration errors exit with 2 before anything runs
    assert_eq!(Command::from_args(args).run(), 2);
    assert!(!output.exists());
}

#[test]
fn test_cli_run_writes_report_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("errtour.toml");
    fs::write(&config_path, "demos = [\"division\"]\n").unwrap();
    let output = dir.path().join("report.json");

    let args = Args::parse_from([
        "errtour",
        "--config",
        config_path.to_str().unwrap(),
        "--divide",
        "6:3",
        "--output",
        "json",
        "--output-file",
        output.to_str().unwrap(),
        "--quiet",
        "--no-colors",
    ]);

    assert_eq!(Command::from_args(args).run(), 0);

    let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(report["outcomes"][0]["demo"], "division");
    assert_eq!(report["outcomes"][0]["status"], "succeeded");
}

#[test]
fn test_cli_failed_demo_exits_with_error() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("errtour.toml");
    fs::write(&config_path, "demos = [\"unguarded-input\"]\n").unwrap();
    let output = dir.path().join("report.csv");

    let args = Args::parse_from([
        "errtour",
        "--config",
        config_path.to_str().unwrap(),
        "--input",
        "nope",
        "--output",
        "csv",
        "--output-file",
        output.to_str().unwrap(),
        "--quiet",
    ]);

    assert_eq!(Command::from_args(args).run(), 1);

    // The report is still written before the failure is signalled
    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.contains("unguarded-input,failed"));
}
