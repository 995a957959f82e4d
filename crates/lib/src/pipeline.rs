//! Top-level build pipeline orchestration.
//!
//! This module provides the high-level [`run`] function that sequences the
//! full build flow:
//!
//! 1. Prepare the output directory
//! 2. Build the client bundle
//! 3. Write the server compiler configuration and build the server
//!
//! Stages run strictly in order; the first failure aborts the remaining
//! sequence. A failed server build leaves the finished client artifacts in
//! place, there is no cleanup of earlier stages.

use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, error, info};

use crate::consts::{
  CLIENT_BUILD_COMMAND, CLIENT_COMMAND_ENV, DIST_DIR, SERVER_BUILD_COMMAND, SERVER_COMMAND_ENV,
};
use crate::prepare;
use crate::steps::{self, StepError};

/// Configuration for one pipeline run.
///
/// Constructed once by the caller and passed by reference into every
/// component; no component reads shared mutable state.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
  /// Project root; working directory for both external tools.
  pub project_root: PathBuf,

  /// Output directory for compiled artifacts, relative to the project root.
  pub dist_dir: PathBuf,

  /// Shell command that bundles the client.
  pub client_command: String,

  /// Shell command that compiles the server.
  pub server_command: String,
}

impl PipelineConfig {
  /// Configuration with the fixed default commands.
  pub fn new(project_root: impl Into<PathBuf>) -> Self {
    Self {
      project_root: project_root.into(),
      dist_dir: PathBuf::from(DIST_DIR),
      client_command: CLIENT_BUILD_COMMAND.to_string(),
      server_command: SERVER_BUILD_COMMAND.to_string(),
    }
  }

  /// Configuration with command overrides taken from the environment.
  ///
  /// `DUPLEX_CLIENT_CMD` and `DUPLEX_SERVER_CMD` replace the default
  /// commands when set; everything else matches [`PipelineConfig::new`].
  pub fn from_env(project_root: impl Into<PathBuf>) -> Self {
    let mut config = Self::new(project_root);
    if let Ok(cmd) = std::env::var(CLIENT_COMMAND_ENV) {
      config.client_command = cmd;
    }
    if let Ok(cmd) = std::env::var(SERVER_COMMAND_ENV) {
      config.server_command = cmd;
    }
    config
  }

  /// Absolute path of the output directory.
  pub fn dist_path(&self) -> PathBuf {
    self.project_root.join(&self.dist_dir)
  }
}

/// Stages of the build pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
  Init,
  DirReady,
  ClientBuilt,
  ServerBuilt,
  Done,
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Stage::Init => "init",
      Stage::DirReady => "dir-ready",
      Stage::ClientBuilt => "client-built",
      Stage::ServerBuilt => "server-built",
      Stage::Done => "done",
    };
    f.write_str(name)
  }
}

/// Errors that can occur during a pipeline run.
///
/// Each variant names the stage that failed; the source chain carries the
/// underlying cause and, for command failures, the tool's captured stderr.
#[derive(Debug, Error)]
pub enum PipelineError {
  /// The output directory could not be created.
  #[error("failed to prepare output directory {0}")]
  PrepareFailed(PathBuf),

  /// The client build step failed.
  #[error("Client build failed: {source}")]
  Client {
    #[source]
    source: StepError,
  },

  /// The server build step failed.
  #[error("Server build failed: {source}")]
  Server {
    #[source]
    source: StepError,
  },
}

impl PipelineError {
  /// Captured stderr of the failed external tool, if any.
  pub fn captured_stderr(&self) -> Option<&str> {
    match self {
      PipelineError::PrepareFailed(_) => None,
      PipelineError::Client { source } | PipelineError::Server { source } => source.captured_stderr(),
    }
  }
}

/// Result of a successful pipeline run.
#[derive(Debug)]
pub struct BuildReport {
  /// The output directory that now holds the artifacts.
  pub dist_dir: PathBuf,

  /// Wall-clock duration of the client build step.
  pub client_elapsed: Duration,

  /// Wall-clock duration of the server build step.
  pub server_elapsed: Duration,
}

/// Run the full build pipeline.
///
/// Prepares the output directory, builds the client, then builds the
/// server. The first failure short-circuits the remaining stages; nothing
/// is retried and no partial cleanup is performed.
///
/// # Returns
///
/// A [`BuildReport`] on full success, or the [`PipelineError`] of the
/// first failed stage.
pub async fn run(config: &PipelineConfig) -> Result<BuildReport, PipelineError> {
  info!(project_root = %config.project_root.display(), stage = %Stage::Init, "starting build");

  let dist = config.dist_path();
  if !prepare::ensure_dir(&dist).await {
    error!(dir = %dist.display(), "failed to prepare output directory");
    return Err(PipelineError::PrepareFailed(dist));
  }
  debug!(stage = %Stage::DirReady, "stage reached");

  let started = Instant::now();
  if let Err(source) = steps::build_client(config).await {
    error!(error = %source, "Client build failed");
    return Err(PipelineError::Client { source });
  }
  let client_elapsed = started.elapsed();
  debug!(stage = %Stage::ClientBuilt, "stage reached");

  let started = Instant::now();
  if let Err(source) = steps::build_server(config).await {
    error!(error = %source, "Server build failed");
    return Err(PipelineError::Server { source });
  }
  let server_elapsed = started.elapsed();
  debug!(stage = %Stage::ServerBuilt, "stage reached");

  info!(dist = %dist.display(), stage = %Stage::Done, "build completed successfully");
  Ok(BuildReport {
    dist_dir: dist,
    client_elapsed,
    server_elapsed,
  })
}
