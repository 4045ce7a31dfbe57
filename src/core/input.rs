// src/core/input.rs
use crate::models::AssignmentUpdate;
use thiserror::Error;

/// Rejections raised before any state is changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid number")]
    InvalidNumber,
    #[error("Value must be between 0 and 100")]
    OutOfRange,
    #[error("Name cannot be empty")]
    BlankName,
    #[error("Subject not found: {0}")]
    UnknownSubject(String),
    #[error("Assignment not found: {0}")]
    UnknownAssignment(String),
}

/// Checks that a number is a usable percentage.
///
/// # Errors
///
/// * [`InputError::InvalidNumber`] for NaN or infinite values
/// * [`InputError::OutOfRange`] for values outside `[0, 100]`
pub fn check_percent(value: f64) -> Result<f64, InputError> {
    if !value.is_finite() {
        return Err(InputError::InvalidNumber);
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(InputError::OutOfRange);
    }
    Ok(value)
}

/// Parses raw text typed into a weight or grade field.
///
/// Blank text means "no value" and yields `Ok(None)`.
///
/// # Errors
///
/// * [`InputError::InvalidNumber`] if the text is not a number
/// * [`InputError::OutOfRange`] if the number is outside `[0, 100]`
pub fn parse_percent(text: &str) -> Result<Option<f64>, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let value: f64 = text.parse().map_err(|_| InputError::InvalidNumber)?;
    check_percent(value).map(Some)
}

/// Builds a weight update from field text. A blank weight becomes 0.
///
/// # Errors
///
/// See [`parse_percent`].
pub fn weight_update(text: &str) -> Result<AssignmentUpdate, InputError> {
    Ok(AssignmentUpdate::SetWeight(parse_percent(text)?.unwrap_or(0.0)))
}

/// Builds a grade update from field text. A blank grade clears the grade.
///
/// # Errors
///
/// See [`parse_percent`].
pub fn grade_update(text: &str) -> Result<AssignmentUpdate, InputError> {
    Ok(AssignmentUpdate::SetGrade(parse_percent(text)?))
}

/// Validates a subject name. The name is kept as typed; only blank names
/// are rejected.
///
/// # Errors
///
/// Returns [`InputError::BlankName`] when the name is empty after trimming.
pub fn check_name(name: &str) -> Result<&str, InputError> {
    if name.trim().is_empty() {
        return Err(InputError::BlankName);
    }
    Ok(name)
}
