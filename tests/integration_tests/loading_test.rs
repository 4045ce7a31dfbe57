// tests/integration_tests/loading_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use gradecalc::{load_config, load_subjects_dir, load_subjects_file, summarize};

#[test]
fn test_load_directory_in_path_order() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let subjects = load_subjects_dir(temp_dir.path())?;
    let names: Vec<&str> = subjects.iter().map(|s| s.name.as_str()).collect();

    assert_eq!(
        names,
        vec!["Maths", "Physics", "History", "Art"],
        "Should load yaml files sorted by path and skip hidden directories"
    );

    let physics = summarize(&subjects[1]);
    assert!((physics.current_total - 28.0).abs() < 1e-9);
    assert!((physics.point_potential - 88.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_broken_file_reports_path() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(temp_dir.path(), "semester3/broken.yaml", "- [unclosed")?;

    let err = load_subjects_dir(temp_dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("broken.yaml"), "{err:#}");
    Ok(())
}

#[test]
fn test_config_points_at_subjects_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(
        temp_dir.path(),
        ".gradecalc.toml",
        "subjects_file = \"semester1/maths.yaml\"\ntarget_grade = 85.0\n",
    )?;

    let config = load_config(&temp_dir.path().join("semester2"))?;
    assert_eq!(config.target_grade, Some(85.0));

    let subjects = load_subjects_file(config.subjects_file.as_deref().unwrap())?;
    assert_eq!(subjects[0].name, "Maths");
    assert!(summarize(&subjects[0]).is_complete);
    Ok(())
}
