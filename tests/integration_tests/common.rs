// tests/integration_tests/common.rs
use anyhow::Result;
use gradecalc::{Assignment, Subject};
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn data_structures() -> Subject {
    Subject::new(
        "ds",
        "Data Structures",
        vec![
            Assignment::new("ds-1", "Sorting", 20.0, Some(85.0)),
            Assignment::new("ds-2", "Trees", 20.0, Some(92.0)),
            Assignment::new("ds-3", "Midterm", 25.0, Some(78.0)),
            Assignment::new("ds-4", "Final", 35.0, None),
        ],
    )
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "semester1/maths.yaml",
        "id: m\nname: Maths\nassignments:\n  - { id: m1, name: Exam, weight: 100, grade: 91 }\n",
    )?;

    create_test_file(
        temp_dir.path(),
        "semester1/physics.yml",
        "id: p\nname: Physics\nassignments:\n  - { id: p1, name: Lab, weight: 40, grade: 70 }\n  - { id: p2, name: Exam, weight: 60 }\n",
    )?;

    create_test_file(
        temp_dir.path(),
        "semester2/all.yaml",
        "subjects:\n  - id: h\n    name: History\n    assignments: []\n  - id: a\n    name: Art\n",
    )?;

    create_test_file(temp_dir.path(), "semester2/README.md", "Not a subject file")?;
    create_test_file(temp_dir.path(), ".drafts/wip.yaml", "id: w\nname: Draft\n")?;

    Ok(temp_dir)
}
