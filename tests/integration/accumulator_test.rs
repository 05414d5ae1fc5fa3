use errtour::{
    core::{Accumulator, ScriptedSource, StopReason},
    error::{InputRejection, TourError},
    output::{Level, Transcript},
};

fn run(threshold: u64, tokens: &[&str]) -> (errtour::core::Accumulation, Transcript, ScriptedSource) {
    let mut source = ScriptedSource::new(tokens.iter().copied());
    let mut transcript = Transcript::new();
    let accumulation = Accumulator::new(threshold)
        .run(&mut source, &mut transcript)
        .unwrap();
    (accumulation, transcript, source)
}

#[test]
fn test_mixed_input_scenario() {
    let (accumulation, transcript, source) = run(3, &["2", "abc", "-1", "1"]);

    assert_eq!(accumulation.total, 3);
    assert_eq!(accumulation.consumed, 4);
    assert_eq!(accumulation.accepted, vec![2, 1]);
    assert_eq!(accumulation.stop, StopReason::ThresholdReached);
    assert_eq!(source.remaining(), 0);

    assert_eq!(
        transcript.texts(),
        vec![
            "[With Try-Except] Handling input gracefully",
            "[ValueError] That's not a valid number.",
            "Input must be a positive number!",
            "Program finished",
        ]
    );
}

#[test]
fn test_stops_at_the_token_that_reaches_the_threshold() {
    let tokens = ["1", "0", "4", "7", "9"];
    let (accumulation, _, source) = run(5, &tokens);

    // 1 + 0 + 4 reaches 5; nothing after that is read
    assert_eq!(accumulation.total, 5);
    assert_eq!(accumulation.consumed, 3);
    assert_eq!(source.served(), 3);
    assert_eq!(source.remaining(), 2);
}

#[test]
fn test_total_may_overshoot_threshold() {
    let (accumulation, _, _) = run(3, &["10"]);
    assert_eq!(accumulation.total, 10);
    assert_eq!(accumulation.consumed, 1);
}

#[test]
fn test_one_diagnostic_per_bad_token() {
    let bad = ["abc", "", "1.5", "-3", " -7 ", "0x10"];
    let mut tokens: Vec<&str> = bad.to_vec();
    tokens.push("3");

    let (accumulation, transcript, _) = run(3, &tokens);

    assert_eq!(accumulation.total, 3);
    assert_eq!(accumulation.rejected_count, bad.len());
    assert_eq!(transcript.count(Level::Error), bad.len());

    let negatives = accumulation
        .rejected
        .iter()
        .filter(|r| matches!(r, InputRejection::Negative { .. }))
        .count();
    assert_eq!(negatives, 2);
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let (accumulation, transcript, _) = run(4, &[" 2 ", "\t2"]);
    assert_eq!(accumulation.total, 4);
    assert_eq!(transcript.count(Level::Error), 0);
}

#[test]
fn test_attempt_cap() {
    let mut source = ScriptedSource::new(["x", "y", "z", "1"]);
    let mut transcript = Transcript::new();

    let accumulation = Accumulator::new(3)
        .with_max_attempts(Some(2))
        .run(&mut source, &mut transcript)
        .unwrap();

    assert_eq!(accumulation.stop, StopReason::AttemptsExhausted);
    assert_eq!(accumulation.consumed, 2);
    assert_eq!(accumulation.total, 0);
    assert!(transcript
        .texts()
        .contains(&"Giving up after 2 attempts with a total of 0."));
}

#[test]
fn test_end_of_input() {
    let (accumulation, transcript, _) = run(100, &["5", "nope"]);

    assert_eq!(accumulation.stop, StopReason::InputExhausted);
    assert_eq!(accumulation.total, 5);
    assert_eq!(transcript.count(Level::Warning), 1);
    assert_eq!(transcript.texts().last(), Some(&"Program finished"));
}

#[test]
fn test_unguarded_loop_propagates_parse_failure() {
    let mut source = ScriptedSource::new(["1", "-4", "abc", "5"]);
    let mut transcript = Transcript::new();

    let err = Accumulator::new(3)
        .run_unguarded(&mut source, &mut transcript)
        .unwrap_err();

    match &err {
        TourError::InvalidInput { token, .. } => assert_eq!(token, "abc"),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
    assert!(!err.is_critical());

    // The negative was still turned away, and the loop never finished
    assert_eq!(transcript.count(Level::Error), 1);
    assert!(!transcript.texts().contains(&"Program finished"));
    assert_eq!(source.remaining(), 1);
}
