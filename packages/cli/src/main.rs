mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{convert, init, sample, ConvertArgs, InitArgs, SampleArgs};

/// Blueprint CLI - export a design selection as a render-agnostic blueprint
#[derive(Parser, Debug)]
#[command(name = "blueprint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every node the converter skips
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default blueprint.config.json
    Init(InitArgs),

    /// Convert scene snapshots to blueprint JSON
    Convert(ConvertArgs),

    /// Create a snapshot of placeholder rectangles
    Sample(SampleArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Convert(args) => convert(args, &cwd),
                Command::Sample(args) => sample(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
