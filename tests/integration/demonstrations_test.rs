use std::fs;

use errtour::{
    core::{arithmetic, catch_all_read, divide_and_report, resource::CATCH_ALL_MESSAGE, specific_read, Operand},
    error::ResourceError,
    output::{Level, Transcript},
};
use tempfile::tempdir;

#[test]
fn test_division_reports_result_and_completion() {
    let mut transcript = Transcript::new();
    let caught = divide_and_report(10.0, 2.0, &mut transcript).unwrap();

    assert!(!caught);
    assert_eq!(transcript.texts(), vec!["Result is: 5.0", "Operation complete"]);
}

#[test]
fn test_division_by_zero_still_completes_once() {
    let mut transcript = Transcript::new();
    let caught = divide_and_report(10.0, 0.0, &mut transcript).unwrap();

    assert!(caught);
    assert_eq!(
        transcript.texts(),
        vec!["[ZeroDivisionError] Cannot divide by zero.", "Operation complete"]
    );
    assert_eq!(transcript.count(Level::Cleanup), 1);
}

#[test]
fn test_type_mismatch_is_caught() {
    let mut transcript = Transcript::new();
    assert!(arithmetic::type_mismatch(&mut transcript).unwrap());
    assert_eq!(
        transcript.texts(),
        vec!["[TypeError] You can't divide a string by a number!"]
    );
}

#[test]
fn test_else_finally_runs_cleanup_on_every_branch() {
    let cases = [
        (Operand::Number(8.0), Operand::Number(2.0), false),
        (Operand::Text("8".to_string()), Operand::Number(2.0), true),
        (Operand::Number(8.0), Operand::Number(0.0), true),
    ];

    for (left, right, expect_caught) in cases {
        let mut transcript = Transcript::new();
        let caught = arithmetic::else_finally(&left, &right, &mut transcript).unwrap();

        assert_eq!(caught, expect_caught);
        assert_eq!(transcript.texts().last(), Some(&"[Finally] This block always runs."));
        assert_eq!(transcript.count(Level::Cleanup), 1);
    }
}

#[test]
fn test_missing_file_specific_and_catch_all() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.txt");

    let mut specific = Transcript::new();
    let caught = specific_read(&path, &mut specific).unwrap();
    assert!(matches!(caught, Some(ResourceError::NotFound { .. })));
    assert_eq!(specific.lines.len(), 1);
    assert_eq!(
        specific.texts()[0],
        format!("[FileNotFoundError] '{}' not found. Please check the filename.", path.display())
    );

    let mut generic = Transcript::new();
    assert!(catch_all_read(&path, &mut generic).unwrap());
    assert_eq!(generic.texts(), vec![CATCH_ALL_MESSAGE]);
}

#[test]
fn test_catch_all_hides_the_failure_kind() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let binary = dir.path().join("binary.dat");
    fs::write(&binary, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let mut missing_out = Transcript::new();
    let mut binary_out = Transcript::new();
    catch_all_read(&missing, &mut missing_out).unwrap();
    catch_all_read(&binary, &mut binary_out).unwrap();

    // Two different problems, one indistinguishable message
    assert_eq!(missing_out.texts(), binary_out.texts());

    let mut specific = Transcript::new();
    let caught = specific_read(&binary, &mut specific).unwrap();
    assert!(matches!(caught, Some(ResourceError::NotText { .. })));
    assert_ne!(specific.texts(), binary_out.texts());
}

#[test]
fn test_existing_file_is_echoed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.txt");
    fs::write(&path, "hello from data\n").unwrap();

    let mut transcript = Transcript::new();
    assert!(specific_read(&path, &mut transcript).unwrap().is_none());
    assert_eq!(transcript.texts(), vec!["hello from data"]);

    let mut transcript = Transcript::new();
    assert!(!catch_all_read(&path, &mut transcript).unwrap());
    assert_eq!(transcript.texts(), vec!["hello from data"]);
}
