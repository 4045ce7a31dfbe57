use gradecalc::{Assignment, Subject, required_grade, summarize};
use proptest::prelude::*;

/// Subjects whose weights are split from 100 so they always validate.
fn valid_subject() -> impl Strategy<Value = Subject> {
    proptest::collection::vec((1u32..=20, proptest::option::of(0.0f64..=100.0)), 1..8).prop_map(
        |parts| {
            let units: u32 = parts.iter().map(|(u, _)| *u).sum();
            let assignments = parts
                .iter()
                .enumerate()
                .map(|(i, (u, grade))| {
                    let weight = f64::from(*u) * 100.0 / f64::from(units);
                    Assignment::new(format!("a{i}"), format!("Assignment {i}"), weight, *grade)
                })
                .collect();
            Subject::new("s", "Generated", assignments)
        },
    )
}

fn any_subject() -> impl Strategy<Value = Subject> {
    proptest::collection::vec((-50.0f64..150.0, proptest::option::of(-50.0f64..150.0)), 0..8)
        .prop_map(|parts| {
            let assignments = parts
                .into_iter()
                .enumerate()
                .map(|(i, (weight, grade))| Assignment::new(format!("a{i}"), "x", weight, grade))
                .collect();
            Subject::new("s", "Any", assignments)
        })
}

proptest! {
    #[test]
    fn valid_weights_bound_point_potential(subject in valid_subject()) {
        let summary = summarize(&subject);
        prop_assert!(summary.is_weight_valid);
        prop_assert!(summary.current_total <= summary.point_potential + 1e-9);
        prop_assert!(summary.point_potential <= 100.0 + 1e-6);
        prop_assert!((summary.point_potential - (summary.current_total + summary.remaining_weight)).abs() < 1e-9);
        prop_assert_eq!(summary.is_complete, summary.remaining_weight == 0.0);
    }

    #[test]
    fn invalid_weights_zero_derived_fields(subject in any_subject()) {
        let summary = summarize(&subject);
        if !summary.is_weight_valid {
            prop_assert_eq!(summary.current_total, 0.0);
            prop_assert_eq!(summary.point_potential, 0.0);
            prop_assert_eq!(summary.remaining_weight, 0.0);
            prop_assert_eq!(summary.completed_weight, 0.0);
            prop_assert!(!summary.is_complete);
        } else {
            prop_assert_eq!(summary.is_complete, summary.remaining_weight == 0.0);
        }
    }

    #[test]
    fn required_grade_hits_target(
        current in 0.0f64..=60.0,
        remaining in 1.0f64..=40.0,
        target in 0.0f64..=100.0,
    ) {
        match required_grade(current, target, remaining) {
            Some(required) => {
                prop_assert!(required >= 0.0);
                let final_total = current + required * remaining / 100.0;
                prop_assert!((final_total - target).abs() < 1e-6);
            }
            None => prop_assert!(target < current),
        }
    }
}
