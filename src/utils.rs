// src/utils.rs
use crate::core::summary::{required_grade, summarize};
use crate::models::Subject;
use anyhow::{Context as _, Result};
use glob::Pattern;

/// Percentages are shown with one decimal place.
#[inline]
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Presentation of a required-grade projection.
///
/// Anything above 100% cannot be reached and reads "Not possible".
#[must_use]
pub fn describe_required_grade(required: Option<f64>) -> String {
    match required {
        None => String::from("n/a"),
        Some(value) if value > 100.0 => String::from("Not possible"),
        Some(value) => format_percent(value),
    }
}

/// Dot-prefixed files and directories are skipped when loading a directory.
#[inline]
#[must_use]
pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Keeps the subjects whose name matches a glob such as `"Data*"`.
///
/// # Errors
///
/// Returns an error if `pattern` is not a valid glob.
pub fn filter_subjects(subjects: Vec<Subject>, pattern: Option<&str>) -> Result<Vec<Subject>> {
    let Some(pattern) = pattern else {
        return Ok(subjects);
    };
    let matcher = Pattern::new(pattern)
        .with_context(|| format!("Invalid subject pattern: {pattern}"))?;
    Ok(subjects
        .into_iter()
        .filter(|s| matcher.matches(&s.name))
        .collect())
}

/// Renders the per-subject report printed by the CLI.
#[must_use]
pub fn render_report(subjects: &[Subject], target: Option<f64>) -> String {
    let mut out = String::new();

    for subject in subjects {
        let summary = summarize(subject);
        let marker = if summary.is_weight_valid { "" } else { "⚠ " };

        out.push_str(&format!("{marker}{}\n", subject.name));
        out.push_str(&format!(
            "  Current grade:  {:>7}\n",
            format_percent(summary.current_total)
        ));
        out.push_str(&format!(
            "  Best possible:  {:>7}\n",
            format_percent(summary.point_potential)
        ));
        out.push_str(&format!(
            "  Remaining:      {:>7}\n",
            format_percent(summary.remaining_weight)
        ));
        if let Some(target) = target {
            let required = if summary.is_weight_valid {
                required_grade(summary.current_total, target, summary.remaining_weight)
            } else {
                None
            };
            out.push_str(&format!(
                "  Needed for {}: {}\n",
                format_percent(target),
                describe_required_grade(required)
            ));
        }
        out.push_str(&format!("  {}\n", summary.weight_validation_message));
    }

    out
}
