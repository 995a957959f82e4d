//! Implementation of the `duplex` build command.
//!
//! Runs the full pipeline against the given project root and converts its
//! outcome into a process exit status: 0 on success, 1 when any stage
//! fails. The failing stage and the tool's captured stderr are written to
//! standard error before exiting.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use duplex_lib::pipeline::{self, PipelineConfig};

use crate::output;

/// Execute the build command.
///
/// Prepares the output directory, builds the client bundle, writes the
/// server compiler configuration, and builds the server, stopping at the
/// first failure. Prints a summary with per-step durations on success.
pub fn cmd_build(project_root: &Path) -> Result<()> {
  let config = PipelineConfig::from_env(project_root);
  debug!(
    client = %config.client_command,
    server = %config.server_command,
    "resolved build commands"
  );

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let report = match rt.block_on(pipeline::run(&config)) {
    Ok(report) => report,
    Err(err) => {
      output::print_error(&err.to_string());
      if let Some(stderr) = err.captured_stderr() {
        eprint!("{stderr}");
      }
      std::process::exit(1);
    }
  };

  println!();
  output::print_success("Build completed successfully!");
  output::print_stat("Output", &report.dist_dir.display().to_string());
  output::print_stat("Client", &output::format_duration(report.client_elapsed));
  output::print_stat("Server", &output::format_duration(report.server_elapsed));

  Ok(())
}
