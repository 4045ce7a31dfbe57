// src/models/assignment.rs
use serde::{Deserialize, Serialize};

/// One weighted piece of work inside a subject.
///
/// `weight` and `grade` are percentages. A missing `grade` means the
/// assignment has not been marked yet; it is serialized as an explicit
/// `null` so the wire format never depends on key presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub grade: Option<f64>,
}

impl Assignment {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, weight: f64, grade: Option<f64>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
            grade,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        self.grade.is_some()
    }

    /// `false` when the weight or the grade is NaN or infinite. Such values
    /// have no JSON representation.
    #[inline]
    #[must_use]
    pub fn has_finite_values(&self) -> bool {
        self.weight.is_finite() && self.grade.is_none_or(f64::is_finite)
    }
}
