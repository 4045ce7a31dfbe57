// src/config/loader.rs
use crate::config::Config;
use crate::core::input::check_percent;
use anyhow::{Context as _, Result, anyhow};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".gradecalc.toml";

/// Loads `.gradecalc.toml` starting from the given directory and walking up
/// through its parents until a file is found.
///
/// A relative `subjects_file` is resolved against the directory holding the
/// config file. When no file exists the defaults are returned.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file exists but cannot be read
/// * The file is not valid TOML or has unknown keys
/// * `target_grade` lies outside `[0, 100]`
pub fn load_config(dir: &Path) -> Result<Config> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.is_file() {
            let content = fs::read_to_string(&config_file).with_context(|| {
                format!("Failed to read config file: {}", config_file.display())
            })?;
            let mut config: Config = toml::from_str(&content).with_context(|| {
                format!("Failed to parse config file: {}", config_file.display())
            })?;

            if let Some(target) = config.target_grade {
                check_percent(target).map_err(|e| {
                    anyhow!("Invalid target_grade in {}: {e}", config_file.display())
                })?;
            }
            if let Some(path) = config.subjects_file.take() {
                config.subjects_file = Some(if path.is_relative() {
                    current_dir.join(path)
                } else {
                    path
                });
            }

            debug!(path = %config_file.display(), "loaded config");
            return Ok(config);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    Ok(Config::default())
}
