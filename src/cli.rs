// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::{Config, load_config};
use crate::core::codec::decode;
use crate::core::gradebook::Gradebook;
use crate::core::input::parse_percent;
use crate::core::loader::{load_subjects_dir, load_subjects_file, write_subjects_file};
use crate::models::Subject;
use crate::utils::{filter_subjects, render_report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Subjects file to load (YAML)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Directory of subject files (*.yaml, *.yml) to load
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Share link or query string to restore (e.g. "?data=...")
    #[arg(short, long)]
    pub url: Option<String>,

    /// Use the built-in demo subjects
    #[arg(long)]
    pub demo: bool,

    /// Only report subjects whose name matches this glob (e.g. "Data*")
    #[arg(short = 'n', long)]
    pub subject: Option<String>,

    /// Target final grade; prints the average needed on remaining work
    #[arg(short, long, value_parser = parse_target)]
    pub target: Option<f64>,

    /// Print a shareable link for the loaded subjects
    #[arg(short, long)]
    pub share: bool,

    /// Base address for the share link (overrides the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Write the loaded subjects to this YAML file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory where the search for .gradecalc.toml starts
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}

fn parse_target(text: &str) -> Result<f64, String> {
    match parse_percent(text) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(String::from("Please enter a valid number")),
        Err(e) => Err(e.to_string()),
    }
}

/// Where the subject list came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url,
    File(PathBuf),
    Directory(PathBuf),
    Demo,
}

/// Picks the subject list: url, then file, then directory, then the config's
/// `subjects_file`, then the demo data. A link that cannot be decoded falls
/// back to the demo data.
///
/// # Errors
///
/// Returns an error if a requested file or directory cannot be loaded.
pub fn resolve_subjects(args: &Args, config: &Config) -> Result<(Vec<Subject>, Source)> {
    if args.demo {
        return Ok((Gradebook::demo().into_subjects(), Source::Demo));
    }

    if let Some(url) = &args.url {
        if let Some(subjects) = decode(url) {
            return Ok((subjects, Source::Url));
        }
        warn!("no shared state found in link, showing demo data");
        return Ok((Gradebook::demo().into_subjects(), Source::Demo));
    }

    if let Some(path) = &args.file {
        let subjects = load_subjects_file(path)?;
        return Ok((subjects, Source::File(path.clone())));
    }

    if let Some(dir) = &args.directory {
        let subjects = load_subjects_dir(dir)
            .with_context(|| format!("Failed to load subjects from: {}", dir.display()))?;
        return Ok((subjects, Source::Directory(dir.clone())));
    }

    if let Some(path) = &config.subjects_file {
        let subjects = load_subjects_file(path)?;
        return Ok((subjects, Source::File(path.clone())));
    }

    Ok((Gradebook::demo().into_subjects(), Source::Demo))
}

/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * A subjects file or directory cannot be loaded
/// * The subject pattern is not a valid glob
/// * The share link or output file cannot be produced
pub fn run(args: Args) -> Result<()> {
    let config = load_config(&args.config_dir)?;
    let (subjects, source) = resolve_subjects(&args, &config)?;
    info!(?source, subjects = subjects.len(), "loaded subjects");

    let book = Gradebook::new(subjects);
    let target = args.target.or(config.target_grade);

    let shown = filter_subjects(book.subjects().to_vec(), args.subject.as_deref())?;
    if shown.is_empty() {
        println!("No subjects to show.");
    } else {
        print!("{}", render_report(&shown, target));
    }

    if args.share {
        let base_url = args.base_url.as_deref().unwrap_or(&config.base_url);
        match book.share_link(base_url)? {
            Some(link) => println!("Share link: {link}"),
            None => println!("Nothing to share."),
        }
    }

    if let Some(path) = &args.output {
        write_subjects_file(path, book.subjects())?;
        println!("Saved {} subjects to {}", book.subjects().len(), path.display());
    }

    Ok(())
}
