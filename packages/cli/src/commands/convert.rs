use crate::config::Config;
use anyhow::{anyhow, Result};
use blueprint_converter::{ConvertError, Converter};
use blueprint_scene::Snapshot;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

pub const SNAPSHOT_SUFFIX: &str = ".scene.json";
pub const BLUEPRINT_SUFFIX: &str = ".blueprint.json";

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Snapshot file, or directory searched for *.scene.json
    #[arg(default_value = ".")]
    pub path: String,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

/// What happened to one snapshot
#[derive(Debug, PartialEq)]
enum Outcome {
    Written(String),
    NothingToExport(String),
}

pub fn convert(args: ConvertArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = PathBuf::from(cwd).join(&args.path);

    if !input.exists() {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    }

    let snapshots = find_snapshots(&input)?;
    if snapshots.is_empty() {
        println!("{}", "⚠️  No .scene.json files found".yellow());
        return Ok(());
    }

    if !args.stdout {
        println!("{}", "🔨 Converting selections...".bright_blue().bold());
        println!("Found {} snapshots", snapshots.len());
    }

    let converter = Converter::with_options(config.convert_options.clone());
    let out_dir = args
        .out_dir
        .as_ref()
        .map(|dir| PathBuf::from(cwd).join(dir))
        .or_else(|| config.get_out_dir(cwd));

    let mut written = 0;
    let mut skipped = 0;
    let mut failed = 0;

    for snapshot in &snapshots {
        let relative_path = snapshot.strip_prefix(cwd).unwrap_or(snapshot);
        match convert_file(snapshot, &converter, args.stdout, out_dir.as_deref()) {
            Ok(Outcome::Written(destination)) => {
                written += 1;
                if !args.stdout {
                    println!("  {} {} → {}", "✓".green(), relative_path.display(), destination);
                }
            }
            Ok(Outcome::NothingToExport(reason)) => {
                skipped += 1;
                eprintln!("  {} {} - {}", "⚠️".yellow(), relative_path.display(), reason.yellow());
            }
            Err(e) => {
                failed += 1;
                eprintln!("  {} {} - {}", "✗".red(), relative_path.display(), e.to_string().red());
            }
        }
    }

    if !args.stdout {
        println!();
        println!(
            "{} Converted {} snapshots, {} with nothing to export, {} errors",
            if failed == 0 { "✅".green() } else { "⚠️".yellow() },
            written,
            skipped,
            failed
        );
    }

    if failed > 0 {
        return Err(anyhow!("{} of {} snapshots failed", failed, snapshots.len()));
    }

    Ok(())
}

fn find_snapshots(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(SNAPSHOT_SUFFIX))
        })
        .collect();
    files.sort();

    Ok(files)
}

fn convert_file(
    snapshot_path: &Path,
    converter: &Converter,
    stdout: bool,
    out_dir: Option<&Path>,
) -> Result<Outcome> {
    debug!(path = %snapshot_path.display(), "Loading snapshot");
    let snapshot = Snapshot::load(snapshot_path)?;
    let root = snapshot.single()?;

    let output = match converter.convert_to_json(root) {
        Ok(output) => output,
        Err(err @ ConvertError::Serialize(_)) => return Err(err.into()),
        Err(err) => return Ok(Outcome::NothingToExport(err.to_string())),
    };

    if stdout {
        println!("{}", output);
        return Ok(Outcome::Written("stdout".to_string()));
    }

    let output_dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => snapshot_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };
    fs::create_dir_all(&output_dir)?;

    let output_file = output_dir.join(blueprint_file_name(snapshot_path));
    fs::write(&output_file, output)?;

    Ok(Outcome::Written(output_file.display().to_string()))
}

/// `card.scene.json` becomes `card.blueprint.json`
fn blueprint_file_name(snapshot_path: &Path) -> String {
    let file_name = snapshot_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("selection");
    let stem = file_name
        .strip_suffix(SNAPSHOT_SUFFIX)
        .or_else(|| file_name.strip_suffix(".json"))
        .unwrap_or(file_name);
    format!("{}{}", stem, BLUEPRINT_SUFFIX)
}
