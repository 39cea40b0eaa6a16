//! sambundle CLI - SAM template graph resolver for bundlers
//!
//! Usage: sambundle [OPTIONS] <COMMAND>
//!
//! Commands:
//!   entries      Print the entry point manifest
//!   output-path  Print where a compiled entry point belongs
//!   check        Resolve the template graph and report on it
//!   write        Write every rewritten template under the output root
//!   diff         Preview what write would change

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use sambundle::{Bundler, Config, ConfigWarning, LocalFs, Verbosity};

/// sambundle - resolve SAM templates into bundler entry points
#[derive(Parser, Debug)]
#[command(name = "sambundle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root template (default: template.yml)
    #[arg(long, global = true)]
    template: Option<PathBuf>,

    /// Base directory local file references are rewritten against
    #[arg(long, global = true)]
    input_dir: Option<PathBuf>,

    /// Build output root (default: ./.aws-sam/build)
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    /// Levels of nested stacks to resolve (0 disables nesting)
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Config file to use instead of sambundle.toml / the user config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the entry point manifest (resource key -> source path)
    Entries,

    /// Print where the compiled output of a function belongs
    OutputPath {
        /// Logical id of the function resource
        resource_key: String,
    },

    /// Resolve the template graph and report stacks, entry points and warnings
    Check,

    /// Write every rewritten template under the output root
    Write,

    /// Preview what write would change
    Diff,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StackSummary<'a> {
    template_path: &'a Path,
    entry_points: usize,
    warnings: Vec<&'a str>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let working_dir = std::env::current_dir().context("failed to read current directory")?;

    let (config, warnings) = load_config(&cli, &working_dir)?;
    init_logging(config.output.verbosity.raised(cli.verbose));
    for warning in &warnings {
        warn!("{}", warning);
    }

    let options = config.to_resolve_options(&working_dir);
    let mut bundler = Bundler::new(LocalFs::new(), options, &config.template.path);

    match cli.command {
        Commands::Entries => cmd_entries(&mut bundler, cli.json),
        Commands::OutputPath { resource_key } => {
            cmd_output_path(&mut bundler, &resource_key, cli.json)
        }
        Commands::Check => cmd_check(&mut bundler, cli.json),
        Commands::Write => cmd_write(&mut bundler, cli.json),
        Commands::Diff => cmd_diff(&mut bundler, cli.json),
    }
}

fn load_config(cli: &Cli, working_dir: &Path) -> Result<(Config, Vec<ConfigWarning>)> {
    let (mut config, warnings) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(&working_dir.join(path))?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::load_or_default(working_dir)?,
    };

    if let Some(template) = &cli.template {
        config.template.path = template.clone();
    }
    if let Some(input) = &cli.input_dir {
        config.paths.input = input.clone();
    }
    if let Some(output) = &cli.output_dir {
        config.paths.output = output.clone();
    }
    if let Some(depth) = cli.max_depth {
        config.resolve.max_depth = depth;
    }

    Ok((config, warnings))
}

fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}

fn cmd_entries(bundler: &mut Bundler<LocalFs>, json: bool) -> Result<()> {
    let registry = bundler.entry()?;

    if json {
        println!("{}", serde_json::to_string_pretty(registry)?);
    } else {
        print!("{}", registry);
    }
    Ok(())
}

fn cmd_output_path(bundler: &mut Bundler<LocalFs>, resource_key: &str, json: bool) -> Result<()> {
    bundler.entry()?;
    let output = bundler.output_path(resource_key)?;

    if json {
        let value = serde_json::json!({
            "resourceKey": resource_key,
            "outputPath": output,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", output.display());
    }
    Ok(())
}

fn cmd_check(bundler: &mut Bundler<LocalFs>, json: bool) -> Result<()> {
    bundler.entry()?;
    let graph = bundler.graph()?;

    let summaries: Vec<StackSummary<'_>> = graph
        .stacks()
        .map(|stack| StackSummary {
            template_path: stack.template_path(),
            entry_points: stack.entry_points().len(),
            warnings: stack.warnings().iter().map(|w| w.message.as_str()).collect(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for summary in &summaries {
        println!(
            "{}: {} entry point(s)",
            summary.template_path.display(),
            summary.entry_points
        );
        for warning in &summary.warnings {
            println!("  warning: {}", warning);
        }
    }
    println!(
        "✓ {} stack(s), {} entry point(s)",
        summaries.len(),
        graph.entry_point_count()
    );
    Ok(())
}

fn cmd_write(bundler: &mut Bundler<LocalFs>, json: bool) -> Result<()> {
    bundler.entry()?;
    let report = bundler.write_templates()?;

    if json {
        let failed: Vec<_> = report
            .failed
            .iter()
            .map(|(path, err)| serde_json::json!({ "template": path, "error": err.to_string() }))
            .collect();
        let value = serde_json::json!({ "written": report.written, "failed": failed });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        for path in &report.written {
            println!("wrote {}", path.display());
        }
        for (path, err) in &report.failed {
            eprintln!("failed {}: {}", path.display(), err);
        }
    }

    if !report.is_success() {
        bail!("{} template(s) failed to write", report.failed.len());
    }
    Ok(())
}

fn cmd_diff(bundler: &mut Bundler<LocalFs>, json: bool) -> Result<()> {
    bundler.entry()?;
    let previews = bundler.preview()?;

    if json {
        let value: Vec<_> = previews
            .iter()
            .map(|p| {
                serde_json::json!({
                    "template": p.template_path,
                    "destination": p.destination,
                    "additions": p.diff.additions,
                    "deletions": p.diff.deletions,
                    "diff": p.diff.unified,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for preview in &previews {
        if preview.diff.has_changes() {
            print!("{}", preview.diff.unified);
        } else {
            println!("{}: no changes", preview.template_path.display());
        }
    }
    Ok(())
}
