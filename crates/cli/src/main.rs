use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

/// duplex - build orchestrator for client/server applications
#[derive(Parser)]
#[command(name = "duplex")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Project root containing the client and server sources
  #[arg(default_value = ".")]
  project_root: PathBuf,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  // Initialize logging; RUST_LOG wins over the verbosity flag.
  let default_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .without_time()
    .init();

  cmd::cmd_build(&cli.project_root)
}
