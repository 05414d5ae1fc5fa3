use std::fs;

use errtour::{
    core::{ScriptedSource, Tour},
    models::config::{DemoKind, OutputFormat, Settings},
    models::report::TourReport,
    output::{create_formatter, create_writer, Console},
};
use tempfile::tempdir;

fn sample_report() -> TourReport {
    let settings = Settings {
        demos: vec![DemoKind::ValidatedInput, DemoKind::Division],
        quiet: true,
        use_colors: false,
        ..Settings::default()
    };
    let mut source = ScriptedSource::new(["2", "abc", "-1", "1"]);
    let mut console = Console::new(Vec::new(), false);

    Tour::new(&settings).run(&mut source, &mut console).unwrap()
}

#[test]
fn test_text_report() {
    let report = sample_report();
    let text = create_formatter(OutputFormat::Text, false, false, false)
        .format(&report)
        .unwrap();

    assert!(text.starts_with("Tour Summary\n"));
    assert!(text.contains("validated-input"));
    assert!(text.contains("(total 3)"));
    assert!(text.contains("Demonstrations: 2, succeeded: 0, recovered: 2, failed: 0"));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn test_quiet_text_report() {
    let report = sample_report();
    let text = create_formatter(OutputFormat::Text, true, false, true)
        .format(&report)
        .unwrap();

    assert_eq!(text, "Demonstrations: 2, failed: 0\n");
}

#[test]
fn test_json_report() {
    let report = sample_report();
    let json = create_formatter(OutputFormat::Json, false, false, false)
        .format(&report)
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let outcomes = value["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0]["demo"], "validated-input");
    assert_eq!(outcomes[0]["status"], "recovered");
    assert_eq!(outcomes[0]["total"], 3);
    assert_eq!(outcomes[0]["diagnostics"][1]["level"], "error");
    assert_eq!(
        outcomes[0]["diagnostics"][1]["text"],
        "[ValueError] That's not a valid number."
    );
    assert!(value["finished_at"].is_string());
}

#[test]
fn test_csv_report() {
    let report = sample_report();
    let csv = create_formatter(OutputFormat::Csv, false, false, false)
        .format(&report)
        .unwrap();

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Demo,Status,Diagnostics,Total,Last Message");
    assert_eq!(lines[1], "validated-input,recovered,4,3,Program finished");
    assert_eq!(lines[2], "division,recovered,4,,Operation complete");
}

#[test]
fn test_report_written_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.txt");

    let report = sample_report();
    let text = create_formatter(OutputFormat::Text, false, true, false)
        .format(&report)
        .unwrap();
    create_writer(Some(&path)).write(&text).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, text);
    assert!(written.contains("Duration: "));
    assert!(written.contains("      Program finished"));
}
