//! rulefold — compress a mined rule set against a labeled TSV dataset.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use rf_core::config::DEFAULT_LABEL_COLUMN;
use rf_core::CompressorConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Compress and rank a mined classification rule set.
#[derive(Parser)]
#[command(name = "rulefold", version, about = "Rule set compression and ranking")]
struct Cli {
    /// Tab-separated dataset with named columns
    #[arg(long)]
    dataset: PathBuf,

    /// Rule file, one `<LHS> => <RHS>` rule per line
    #[arg(long)]
    rules: PathBuf,

    /// Output file for the compressed, ranked rules
    #[arg(long)]
    output: PathBuf,

    /// Boolean dataset column marking the positive class
    #[arg(long, default_value = DEFAULT_LABEL_COLUMN)]
    label_column: String,

    /// Print the run report as JSON to stdout
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .init();

    let args = Cli::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(args: Cli) -> Result<()> {
    let config = CompressorConfig {
        label_column: args.label_column,
    };

    // Both inputs are loaded fully before compression starts; a failure
    // on either side means the core never runs partially loaded.
    let dataset = rf_parser::load_table(&args.dataset, &config.label_column)?;
    let rules = rf_parser::load_rules(&args.rules)?;
    info!(records = dataset.len(), rules = rules.len(), "inputs loaded");

    let result = rf_compactor::compress(&dataset, &rules)?;

    let mut out = String::new();
    for rule in &result.rules {
        out.push_str(rule);
        out.push('\n');
    }
    std::fs::write(&args.output, out)
        .with_context(|| format!("writing compressed rules to {}", args.output.display()))?;
    info!(
        kept = result.compressed_count,
        dropped = result.original_count - result.compressed_count,
        "saved compressed rules to {}",
        args.output.display()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
