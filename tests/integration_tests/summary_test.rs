// tests/integration_tests/summary_test.rs
use super::common::data_structures;
use gradecalc::{Assignment, Subject, required_grade, summarize};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_end_to_end_scenario() {
    let summary = summarize(&data_structures());

    assert_close(summary.total_weight, 100.0);
    assert!(summary.is_weight_valid);
    assert_close(summary.current_total, 54.9);
    assert_close(summary.remaining_weight, 35.0);
    assert_close(summary.point_potential, 89.9);

    // Reaching 80 needs (80 - 54.9) / 35 * 100 on the final.
    let needed = required_grade(summary.current_total, 80.0, summary.remaining_weight).unwrap();
    assert_close(needed, 2510.0 / 35.0);

    // 95 would need more than a perfect final.
    let needed = required_grade(summary.current_total, 95.0, summary.remaining_weight).unwrap();
    assert!(needed > 100.0);
}

#[test]
fn test_required_grade_documented_cases() {
    assert_eq!(required_grade(70.0, 90.0, 0.0), None);
    assert_close(required_grade(50.0, 60.0, 20.0).unwrap(), 50.0);
    assert_eq!(required_grade(90.0, 60.0, 20.0), None);
}

#[test]
fn test_overweight_subject() {
    let mut subject = data_structures();
    subject
        .assignments
        .push(Assignment::new("ds-5", "Bonus", 10.0, Some(100.0)));

    let summary = summarize(&subject);
    assert!(!summary.is_weight_valid);
    assert!(!summary.is_complete);
    assert_eq!(summary.current_total, 0.0);
    assert_eq!(summary.point_potential, 0.0);
    assert_eq!(
        summary.weight_validation_message,
        "Assignment weights currently total 110.0% (10.0% too high)"
    );
}

#[test]
fn test_summarize_does_not_mutate_input() {
    let subject = Subject::new(
        "x",
        "Clamped",
        vec![Assignment::new("x1", "Odd", 250.0, Some(-3.0))],
    );
    let before = subject.clone();
    let _ = summarize(&subject);
    assert_eq!(subject, before);
}
