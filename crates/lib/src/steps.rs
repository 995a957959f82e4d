//! The client and server build steps.
//!
//! Each step delegates to an external tool through [`crate::runner`] and
//! propagates the structured error instead of flattening it; the pipeline
//! decides what a failure means for the run.

use thiserror::Error;
use tracing::info;

use crate::pipeline::PipelineConfig;
use crate::runner::{self, RunnerError};
use crate::tsconfig::{self, TsconfigError};

/// Errors that can occur inside a build step.
#[derive(Debug, Error)]
pub enum StepError {
  /// The external build command failed.
  #[error(transparent)]
  Command(#[from] RunnerError),

  /// The server compiler configuration could not be written.
  #[error("failed to write server tsconfig: {0}")]
  Tsconfig(#[from] TsconfigError),
}

impl StepError {
  /// Captured stderr of the failed external tool, if any.
  pub fn captured_stderr(&self) -> Option<&str> {
    match self {
      StepError::Command(err) => err.stderr(),
      StepError::Tsconfig(_) => None,
    }
  }
}

/// Build the client bundle.
///
/// Runs the configured bundler command with the project root as working
/// directory.
pub async fn build_client(config: &PipelineConfig) -> Result<(), StepError> {
  info!(cmd = %config.client_command, "building client");

  runner::run_shell(&config.client_command, &config.project_root).await?;
  Ok(())
}

/// Build the server.
///
/// Writes the server compiler configuration, then runs the configured
/// compiler command against it. The compiler is never invoked when the
/// configuration write fails.
pub async fn build_server(config: &PipelineConfig) -> Result<(), StepError> {
  info!(cmd = %config.server_command, "building server");

  tsconfig::emit_server_tsconfig(&config.project_root).await?;
  runner::run_shell(&config.server_command, &config.project_root).await?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::consts::SERVER_TSCONFIG_FILE;
  use tempfile::TempDir;

  fn test_config(root: &std::path::Path, client: &str, server: &str) -> PipelineConfig {
    PipelineConfig {
      project_root: root.to_path_buf(),
      dist_dir: "dist".into(),
      client_command: client.to_string(),
      server_command: server.to_string(),
    }
  }

  #[tokio::test]
  async fn client_step_succeeds_on_exit_zero() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path(), "echo bundled", "echo unused");

    assert!(build_client(&config).await.is_ok());
  }

  #[tokio::test]
  #[cfg(unix)]
  async fn client_step_propagates_command_failure() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path(), "echo broken >&2; exit 1", "echo unused");

    let err = build_client(&config).await.unwrap_err();

    assert!(matches!(err, StepError::Command(_)));
    assert_eq!(err.captured_stderr(), Some("broken\n"));
  }

  #[tokio::test]
  #[cfg(unix)]
  async fn server_step_writes_config_before_compiler_runs() {
    let temp = TempDir::new().unwrap();
    // The command only succeeds if the config file already exists.
    let config = test_config(
      temp.path(),
      "echo unused",
      &format!("test -f {}", SERVER_TSCONFIG_FILE),
    );

    assert!(build_server(&config).await.is_ok());
  }

  #[tokio::test]
  #[cfg(unix)]
  async fn server_step_skips_compiler_when_emit_fails() {
    let temp = TempDir::new().unwrap();
    // A directory occupying the config path makes emission fail.
    std::fs::create_dir(temp.path().join(SERVER_TSCONFIG_FILE)).unwrap();
    let config = test_config(temp.path(), "echo unused", "touch compiler_ran");

    let err = build_server(&config).await.unwrap_err();

    assert!(matches!(err, StepError::Tsconfig(_)));
    assert!(err.captured_stderr().is_none());
    assert!(!temp.path().join("compiler_ran").exists());
  }

  #[tokio::test]
  #[cfg(unix)]
  async fn server_step_propagates_compiler_failure() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path(), "echo unused", "echo tsc-error >&2; exit 2");

    let err = build_server(&config).await.unwrap_err();

    assert!(matches!(err, StepError::Command(_)));
    assert_eq!(err.captured_stderr(), Some("tsc-error\n"));
  }
}
