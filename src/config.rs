// src/config.rs
pub mod loader;

pub use loader::{CONFIG_FILE_NAME, load_config};

use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/";

/// Settings read from `.gradecalc.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Address the share link points at.
    pub base_url: String,
    /// Target used for required-grade projections when `--target` is absent.
    pub target_grade: Option<f64>,
    /// Subjects file used when no other source is given.
    pub subjects_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            target_grade: None,
            subjects_file: None,
        }
    }
}
