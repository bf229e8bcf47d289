mod driver;
mod error;
mod rename;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "snakify",
    version,
    about = "Rewrite camelCase identifiers in a file to snake_case, writing <path>.hpp"
)]
struct Cli {
    /// Text file to convert; the input itself is left untouched
    path: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let output = driver::convert_file(&cli.path)
        .with_context(|| format!("Failed to convert {}", cli.path.display()))?;

    tracing::info!("Converted {} -> {}", cli.path.display(), output.display());

    Ok(())
}
