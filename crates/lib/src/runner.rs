//! Shell command execution for build steps.
//!
//! Every external tool the pipeline invokes goes through [`run_shell`]:
//! one command string, one working directory, both output streams fully
//! buffered. There is no streaming, no timeout, and no retry; a command
//! either resolves with its stdout or fails with the captured stderr.

use std::path::Path;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, error, info};

/// Errors that can occur while executing an external command.
#[derive(Debug, Error)]
pub enum RunnerError {
  /// The command could not be spawned at all.
  #[error("failed to spawn `{command}`: {source}")]
  Spawn {
    command: String,
    #[source]
    source: std::io::Error,
  },

  /// The command ran but exited non-zero.
  #[error("command failed with exit code {code:?}: {command}")]
  NonZeroExit {
    command: String,
    code: Option<i32>,
    /// Complete captured standard-error text.
    stderr: String,
  },
}

impl RunnerError {
  /// Captured stderr of the failed command, if it ran at all.
  pub fn stderr(&self) -> Option<&str> {
    match self {
      RunnerError::Spawn { .. } => None,
      RunnerError::NonZeroExit { stderr, .. } => Some(stderr),
    }
  }
}

/// Execute a shell command in the given working directory.
///
/// The command string is passed to the platform shell (`/bin/sh -c` on
/// Unix). Both streams are buffered to completion and written to the
/// diagnostic log before the call resolves.
///
/// # Arguments
///
/// * `command` - The command string to execute
/// * `cwd` - Working directory for the command
///
/// # Returns
///
/// The complete captured stdout text on exit code 0, or a [`RunnerError`]
/// carrying the exit code and captured stderr otherwise.
pub async fn run_shell(command: &str, cwd: &Path) -> Result<String, RunnerError> {
  info!(cmd = %command, cwd = %cwd.display(), "executing command");

  let (shell, shell_arg) = get_shell();

  let output = Command::new(shell)
    .arg(shell_arg)
    .arg(command)
    .current_dir(cwd)
    .output()
    .await
    .map_err(|source| RunnerError::Spawn {
      command: command.to_string(),
      source,
    })?;

  let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
  let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

  if !output.status.success() {
    if !stderr.is_empty() {
      error!(stderr = %stderr, "command stderr");
    }
    if !stdout.is_empty() {
      debug!(stdout = %stdout, "command stdout");
    }
    return Err(RunnerError::NonZeroExit {
      command: command.to_string(),
      code: output.status.code(),
      stderr,
    });
  }

  if !stdout.is_empty() {
    debug!(stdout = %stdout, "command output");
  }

  Ok(stdout)
}

/// Get the shell command and argument for the current platform.
///
/// `/bin/sh -c` on Unix rather than `$SHELL`, so interactive profile files
/// never influence a build.
fn get_shell() -> (&'static str, &'static str) {
  #[cfg(unix)]
  {
    ("/bin/sh", "-c")
  }

  #[cfg(windows)]
  {
    ("cmd.exe", "/C")
  }
}
