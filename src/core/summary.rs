// src/core/summary.rs
use crate::models::{Assignment, Subject, SubjectSummary};

/// Tolerance used when checking that assignment weights add up to 100%.
pub const WEIGHT_TOLERANCE: f64 = 0.01;

const FULL_WEIGHT: f64 = 100.0;

/// Clamps a percentage into `[0, 100]`, mapping non-finite values to 0.
#[inline]
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, FULL_WEIGHT)
    } else {
        0.0
    }
}

/// Grade of an assignment after clamping. Non-finite grades count as ungraded.
fn effective_grade(assignment: &Assignment) -> Option<f64> {
    assignment
        .grade
        .filter(|grade| grade.is_finite())
        .map(clamp_percent)
}

#[inline]
#[must_use]
pub fn total_weight(assignments: &[Assignment]) -> f64 {
    assignments
        .iter()
        .map(|a| clamp_percent(a.weight))
        .fold(0.0, |total, weight| total + weight)
}

#[inline]
#[must_use]
pub fn is_full_weight(total_weight: f64) -> bool {
    (total_weight - FULL_WEIGHT).abs() < WEIGHT_TOLERANCE
}

/// Returns `true` when the assignment weights add up to 100% within tolerance.
#[inline]
#[must_use]
pub fn validate_weight_total(assignments: &[Assignment]) -> bool {
    is_full_weight(total_weight(assignments))
}

/// Human-readable status line for a subject's weight total.
#[must_use]
pub fn weight_validation_message(total_weight: f64) -> String {
    if is_full_weight(total_weight) {
        return String::from("Assignment weights total 100% ✓");
    }
    if total_weight < FULL_WEIGHT {
        return format!(
            "Assignment weights currently total {total_weight:.1}% (need {:.1}% more)",
            FULL_WEIGHT - total_weight
        );
    }
    format!(
        "Assignment weights currently total {total_weight:.1}% ({:.1}% too high)",
        total_weight - FULL_WEIGHT
    )
}

/// Computes the summary of a subject.
///
/// When the weights do not add up to 100% every grade-derived figure is
/// reported as zero rather than a partial number built on a broken basis.
/// A subject only counts as complete when its weights are valid and no
/// ungraded weight remains.
#[must_use]
pub fn summarize(subject: &Subject) -> SubjectSummary {
    let total_weight = total_weight(&subject.assignments);
    let is_weight_valid = is_full_weight(total_weight);
    let weight_validation_message = weight_validation_message(total_weight);

    if !is_weight_valid {
        return SubjectSummary {
            current_total: 0.0,
            point_potential: 0.0,
            remaining_weight: 0.0,
            completed_weight: 0.0,
            total_weight,
            is_weight_valid,
            is_complete: false,
            weight_validation_message,
        };
    }

    let mut current_total = 0.0;
    let mut completed_weight = 0.0;
    let mut remaining_weight = 0.0;

    for assignment in &subject.assignments {
        let weight = clamp_percent(assignment.weight);
        match effective_grade(assignment) {
            Some(grade) => {
                current_total += grade * weight / FULL_WEIGHT;
                completed_weight += weight;
            }
            None => remaining_weight += weight,
        }
    }

    SubjectSummary {
        current_total,
        point_potential: current_total + remaining_weight,
        remaining_weight,
        completed_weight,
        total_weight,
        is_weight_valid,
        is_complete: remaining_weight == 0.0,
        weight_validation_message,
    }
}

/// Average grade needed on the remaining weight to finish at `target_grade`.
///
/// Returns `None` when the question has no meaningful answer: nothing is
/// left to grade, an input lies outside `[0, 100]`, or the target is already
/// secured. Values above 100 are returned as-is; deciding that they are out
/// of reach is left to the caller.
#[must_use]
pub fn required_grade(current_total: f64, target_grade: f64, remaining_weight: f64) -> Option<f64> {
    if remaining_weight <= 0.0 {
        return None;
    }
    let in_range = |value: f64| (0.0..=FULL_WEIGHT).contains(&value);
    if !in_range(current_total) || !in_range(target_grade) || !in_range(remaining_weight) {
        return None;
    }

    let required = (target_grade - current_total) / remaining_weight * FULL_WEIGHT;
    if !required.is_finite() || required < 0.0 {
        return None;
    }
    Some(required)
}
