// src/models/subject.rs
use crate::models::Assignment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

impl Subject {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, assignments: Vec<Assignment>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            assignments,
        }
    }

    #[inline]
    #[must_use]
    pub fn assignment(&self, assignment_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == assignment_id)
    }

    /// First assignment whose weight or grade is NaN or infinite.
    #[inline]
    #[must_use]
    pub fn non_finite_assignment(&self) -> Option<&Assignment> {
        self.assignments.iter().find(|a| !a.has_finite_values())
    }
}
