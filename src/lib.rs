// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run};
pub use crate::config::{Config, load_config};
pub use crate::core::codec::{decode, decode_token, encode, share_link};
pub use crate::core::demo::demo_subjects;
pub use crate::core::gradebook::Gradebook;
pub use crate::core::input::{InputError, parse_percent};
pub use crate::core::loader::{load_subjects_dir, load_subjects_file, parse_subjects};
pub use crate::core::summary::{required_grade, summarize, validate_weight_total};
pub use crate::models::{Assignment, AssignmentUpdate, Subject, SubjectSummary};
