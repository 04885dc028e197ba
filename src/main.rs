//! Tasklift - turn implementation plans into trackable task checklists.
//!
//! Tasklift reads a markdown plan, extracts commands, milestones, and
//! bullet tasks, and regenerates a checklist document from them.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tasklift::{Config, Summary, Transformer};

/// Turn narrative implementation plans into trackable task checklists
#[derive(Parser)]
#[command(name = "tasklift")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the task checklist from the plan (default)
    Generate {
        /// Plan document to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Checklist document to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the checklist to stdout instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Extract tasks from a plan and show them without writing
    Scan {
        /// Plan document to scan
        #[arg(default_value = "PLAN.md")]
        path: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show configuration
    Config {
        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry().with(fmt::layer().with_target(false)).with(filter).init();

    match cli.command {
        None => {
            cmd_generate(None, None, false)?;
        }
        Some(Commands::Generate { input, output, dry_run }) => {
            cmd_generate(input, output, dry_run)?;
        }
        Some(Commands::Scan { path, format }) => {
            cmd_scan(&path, &format)?;
        }
        Some(Commands::Config { path }) => {
            cmd_config(path)?;
        }
        Some(Commands::Completions { shell }) => {
            cmd_completions(shell);
        }
    }

    Ok(())
}

/// Run the plan-to-checklist transform.
fn cmd_generate(input: Option<PathBuf>, output: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(input) = input {
        config.input = input;
    }
    if let Some(output) = output {
        config.output = output;
    }

    println!(
        "=== Generating {} from {} ===",
        config.output.display(),
        config.input.display()
    );

    let transformer = Transformer::new(config.clone());

    if dry_run {
        let (document, tasks) = transformer.preview()?;
        println!("[DRY RUN] Would write {}:\n", config.output.display());
        println!("{document}");
        print_summary(&Summary::from_tasks(&tasks), &config, true);
        return Ok(());
    }

    let summary = transformer.run()?;
    print_summary(&summary, &config, false);

    Ok(())
}

/// Print the progress counts for a finished run.
fn print_summary(summary: &Summary, config: &Config, dry_run: bool) {
    if dry_run {
        println!("\nWould generate {} with {} tasks", config.output.display(), summary.total);
    } else {
        println!("\nGenerated {} with {} tasks", config.output.display(), summary.total);
    }
    println!("- Milestones: {}", summary.milestones);
    println!("- Commands: {}", summary.commands);
    println!("- Implementation Tasks: {}", summary.tasks);
}

/// Extract tasks from a plan and show them.
fn cmd_scan(path: &Path, format: &str) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }

    let content = std::fs::read_to_string(path)?;
    let tasks = tasklift::scan_plan(&content);

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&tasks)?;
            println!("{json}");
        }
        _ => {
            for task in &tasks {
                println!(
                    "{} {:03} {} [{}] {} - {}",
                    task.status.glyph(),
                    task.id,
                    task.kind.icon(),
                    task.timeline,
                    task.phase,
                    task.description
                );
            }
            println!("\nTotal: {} tasks", tasks.len());
        }
    }

    Ok(())
}

/// Show configuration.
fn cmd_config(show_path: bool) -> Result<()> {
    if show_path {
        if let Some(path) = Config::config_dir() {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let config = Config::load()?;
    let toml = toml::to_string_pretty(&config)?;
    println!("{toml}");

    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "tasklift", &mut io::stdout());
}
