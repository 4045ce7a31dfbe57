// src/models/assignment_update.rs

/// A single edit applied to one assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentUpdate {
    SetName(String),
    SetWeight(f64),
    /// `None` clears the grade.
    SetGrade(Option<f64>),
}
