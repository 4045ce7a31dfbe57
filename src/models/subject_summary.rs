// src/models/subject_summary.rs
use serde::Serialize;

/// Derived totals for one subject. Always recomputed, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSummary {
    /// Weighted sum of the grades already received.
    pub current_total: f64,
    /// Best final grade reachable if every ungraded assignment scores 100%.
    pub point_potential: f64,
    pub remaining_weight: f64,
    pub completed_weight: f64,
    pub total_weight: f64,
    pub is_weight_valid: bool,
    pub is_complete: bool,
    pub weight_validation_message: String,
}
