// src/models/shared_state.rs
use crate::models::Subject;
use serde::{Deserialize, Serialize};

/// Document carried inside a share token: `{ "subjects": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedState {
    pub subjects: Vec<Subject>,
}
