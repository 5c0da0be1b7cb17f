use anyhow::{anyhow, Result};
use blueprint_scene::{GroupNode, NodeCommon, Paint, Rect, RectangleNode, SceneNode, Snapshot};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

const SPACING: f64 = 150.0;
const SIZE: f64 = 100.0;

#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Number of rectangles to create
    #[arg(short, long, default_value_t = 5)]
    pub count: usize,

    /// Snapshot file to write
    #[arg(short, long, default_value = "sample.scene.json")]
    pub output: String,

    /// Wrap the rectangles in a group so the snapshot holds a single selection
    #[arg(short, long)]
    pub group: bool,

    /// Force overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

pub fn sample(args: SampleArgs, cwd: &str) -> Result<()> {
    let output = PathBuf::from(cwd).join(&args.output);
    if output.exists() && !args.force {
        return Err(anyhow!(
            "{} already exists. Use --force to overwrite",
            output.display()
        ));
    }

    let snapshot = sample_snapshot(args.count, args.group);
    fs::write(&output, snapshot.to_json()?)?;

    println!(
        "  {} Created {} with {} rectangles",
        "✓".green(),
        args.output,
        args.count
    );
    if snapshot.selection.len() > 1 {
        println!(
            "{}",
            "  The snapshot selects several layers; pass --group to make it convertible".dimmed()
        );
    }

    Ok(())
}

/// Orange placeholder rectangles laid out in a row, all selected
pub fn sample_snapshot(count: usize, group: bool) -> Snapshot {
    let rectangles: Vec<SceneNode> = (0..count)
        .map(|index| {
            let bounds = Rect::new(index as f64 * SPACING, 0.0, SIZE, SIZE);
            let mut rect = RectangleNode::new(bounds).with_fill(Paint::solid(1.0, 0.5, 0.0));
            rect.common.id = format!("sample:{}", index + 1);
            rect.common.name = format!("Rectangle {}", index + 1);
            rect.into()
        })
        .collect();

    if !group || rectangles.is_empty() {
        return Snapshot::new(rectangles);
    }

    let width = (count - 1) as f64 * SPACING + SIZE;
    let mut common = NodeCommon::new(Rect::new(0.0, 0.0, width, SIZE));
    common.name = "Rectangles".to_string();
    let group = GroupNode {
        common,
        children: rectangles,
    };

    Snapshot::new(vec![group.into()])
}
