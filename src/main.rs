use std::path::PathBuf;

use anyhow::{Context, Result};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// SQLCMD scripts to plain SQL.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file, typically an auto-generated SQL script containing SQLCMD variables
    #[arg(short, long)]
    input: PathBuf,

    /// Output file, SQLCMD translated to plain old SQL
    #[arg(short, long)]
    output: PathBuf,

    /// Log ignored directives and a summary of the run
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    sqlcmdvars::translate_file(&args.input, &args.output)
        .with_context(|| format!("translating {}", args.input.display()))?;
    Ok(())
}
