use std::fs;

use errtour::{
    core::{ScriptedSource, Tour},
    models::config::{DemoKind, DivisionCase, Settings},
    models::report::OutcomeStatus,
    output::{Console, Level},
};
use tempfile::tempdir;

fn settings_with_data(data_file: std::path::PathBuf) -> Settings {
    Settings {
        data_file,
        use_colors: false,
        ..Settings::default()
    }
}

#[test]
fn test_full_tour_with_data_file() {
    let dir = tempdir().unwrap();
    let data_file = dir.path().join("data.txt");
    fs::write(&data_file, "three little numbers\n").unwrap();

    let settings = settings_with_data(data_file);
    let mut source = ScriptedSource::new(["2", "abc", "-1", "1", "never read"]);
    let mut console = Console::new(Vec::new(), false);

    let report = Tour::new(&settings).run(&mut source, &mut console).unwrap();

    let order: Vec<DemoKind> = report.outcomes.iter().map(|o| o.demo).collect();
    assert_eq!(order, DemoKind::default_sequence());

    assert_eq!(report.outcome(DemoKind::TypeMismatch).unwrap().status, OutcomeStatus::Recovered);
    assert_eq!(report.outcome(DemoKind::ElseFinally).unwrap().status, OutcomeStatus::Succeeded);
    assert_eq!(report.outcome(DemoKind::CatchAll).unwrap().status, OutcomeStatus::Succeeded);
    assert_eq!(report.outcome(DemoKind::SpecificCatch).unwrap().status, OutcomeStatus::Succeeded);
    assert_eq!(report.outcome(DemoKind::Division).unwrap().status, OutcomeStatus::Recovered);

    let input = report.outcome(DemoKind::ValidatedInput).unwrap();
    assert_eq!(input.status, OutcomeStatus::Recovered);
    assert_eq!(input.total, Some(3));
    assert_eq!(source.remaining(), 1);

    let written = String::from_utf8(console.into_inner()).unwrap();
    assert!(written.contains("==== validated-input ====\n"));
    assert!(written.contains("three little numbers\n"));
    assert!(written.contains("Result is: 5.0\n"));
    assert_eq!(written.matches("Operation complete").count(), 2);
}

#[test]
fn test_missing_data_file_is_recovered() {
    let dir = tempdir().unwrap();
    let settings = Settings {
        demos: vec![DemoKind::CatchAll, DemoKind::SpecificCatch],
        quiet: true,
        ..settings_with_data(dir.path().join("data.txt"))
    };
    let mut source = ScriptedSource::default();
    let mut console = Console::new(Vec::new(), false);

    let report = Tour::new(&settings).run(&mut source, &mut console).unwrap();

    assert_eq!(report.count(OutcomeStatus::Recovered), 2);
    let specific = report.outcome(DemoKind::SpecificCatch).unwrap();
    assert_eq!(specific.diagnostics.len(), 1);
    assert_eq!(specific.diagnostics[0].level, Level::Error);
    assert!(specific.diagnostics[0].text.starts_with("[FileNotFoundError]"));
}

#[test]
fn test_input_demos_share_one_source() {
    let settings = Settings {
        demos: vec![DemoKind::ValidatedInput, DemoKind::UnguardedInput],
        threshold: 2,
        quiet: true,
        ..Settings::default()
    };
    let mut source = ScriptedSource::new(["2", "1", "1"]);
    let mut console = Console::new(Vec::new(), false);

    let report = Tour::new(&settings).run(&mut source, &mut console).unwrap();

    assert_eq!(report.outcomes[0].total, Some(2));
    assert_eq!(report.outcomes[0].status, OutcomeStatus::Succeeded);
    assert_eq!(report.outcomes[1].total, Some(2));
    assert_eq!(report.outcomes[1].status, OutcomeStatus::Succeeded);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn test_unguarded_input_failure_is_reported_and_skipped() {
    let settings = Settings {
        demos: vec![DemoKind::UnguardedInput, DemoKind::Division],
        divisions: vec![DivisionCase::new(1.0, 0.0)],
        quiet: true,
        use_colors: false,
        ..Settings::default()
    };
    let mut source = ScriptedSource::new(["one"]);
    let mut console = Console::new(Vec::new(), false);

    let report = Tour::new(&settings).run(&mut source, &mut console).unwrap();

    assert_eq!(report.count(OutcomeStatus::Failed), 1);
    let failed = report.outcome(DemoKind::UnguardedInput).unwrap();
    assert_eq!(failed.total, None);
    assert_eq!(failed.diagnostics.len(), 1);

    let division = report.outcome(DemoKind::Division).unwrap();
    assert_eq!(division.status, OutcomeStatus::Recovered);
}

#[test]
fn test_quiet_tour_has_no_banners() {
    let settings = Settings {
        demos: vec![DemoKind::ElseFinally],
        quiet: true,
        ..Settings::default()
    };
    let mut source = ScriptedSource::default();
    let mut console = Console::new(Vec::new(), false);

    Tour::new(&settings).run(&mut source, &mut console).unwrap();

    let written = String::from_utf8(console.into_inner()).unwrap();
    assert_eq!(
        written,
        "[Success] Division successful: 4.0\n[Finally] This block always runs.\n"
    );
}
