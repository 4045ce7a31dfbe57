// src/core/loader.rs
use crate::models::{SharedState, Subject};
use crate::utils::is_hidden;
use anyhow::{Context as _, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Shapes accepted in a subjects file.
#[derive(Deserialize)]
#[serde(untagged)]
enum SubjectsDocument {
    Shared(SharedState),
    List(Vec<Subject>),
    Single(Subject),
}

/// Parses a YAML (or JSON) subjects document.
///
/// Accepts a `subjects:` document, a bare list of subjects, or one subject.
///
/// # Errors
///
/// Returns an error if the content matches none of those shapes, or if a
/// weight or grade is `.nan` / `.inf`.
pub fn parse_subjects(content: &str) -> Result<Vec<Subject>> {
    let document: SubjectsDocument =
        serde_yaml_ng::from_str(content).context("Failed to parse subjects document")?;
    let subjects = match document {
        SubjectsDocument::Shared(state) => state.subjects,
        SubjectsDocument::List(subjects) => subjects,
        SubjectsDocument::Single(subject) => vec![subject],
    };

    for subject in &subjects {
        if let Some(assignment) = subject.non_finite_assignment() {
            bail!(
                "Assignment '{}' in subject '{}' has a non-numeric weight or grade",
                assignment.name,
                subject.name
            );
        }
    }
    Ok(subjects)
}

/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_subjects_file(path: &Path) -> Result<Vec<Subject>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read subjects file: {}", path.display()))?;
    parse_subjects(&content)
        .with_context(|| format!("Invalid subjects file: {}", path.display()))
}

fn is_subjects_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// Loads every `*.yaml` / `*.yml` file below `dir`, in path order.
///
/// Hidden files and directories are skipped.
///
/// # Errors
///
/// This function may return an error if:
/// * The directory cannot be traversed
/// * A subjects file cannot be read or parsed
pub fn load_subjects_dir(dir: &Path) -> Result<Vec<Subject>> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
    {
        let entry = entry.with_context(|| format!("Failed to scan directory: {}", dir.display()))?;
        if entry.file_type().is_file() && is_subjects_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();

    let mut subjects = Vec::new();
    for path in &paths {
        debug!(path = %path.display(), "loading subjects file");
        subjects.extend(load_subjects_file(path)?);
    }
    Ok(subjects)
}

/// Writes the subject list as a YAML `subjects:` document.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_subjects_file(path: &Path, subjects: &[Subject]) -> Result<()> {
    let state = SharedState {
        subjects: subjects.to_vec(),
    };
    let yaml = serde_yaml_ng::to_string(&state).context("Failed to serialize subjects")?;
    fs::write(path, yaml)
        .with_context(|| format!("Failed to write subjects file: {}", path.display()))
}
