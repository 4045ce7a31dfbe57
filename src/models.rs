// src/models.rs
pub mod assignment;
pub mod assignment_update;
pub mod shared_state;
pub mod subject;
pub mod subject_summary;

pub use assignment::Assignment;
pub use assignment_update::AssignmentUpdate;
pub use shared_state::SharedState;
pub use subject::Subject;
pub use subject_summary::SubjectSummary;
