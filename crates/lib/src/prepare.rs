//! Output directory preparation.

use std::path::Path;

use tracing::{debug, error};

/// Ensure a directory exists, creating missing intermediate directories.
///
/// Idempotent: succeeds silently when the directory is already present.
/// Never propagates an error; failures are logged and reported as `false`.
pub async fn ensure_dir(path: &Path) -> bool {
  match tokio::fs::create_dir_all(path).await {
    Ok(()) => {
      debug!(dir = %path.display(), "directory ready");
      true
    }
    Err(e) => {
      error!(dir = %path.display(), error = %e, "failed to create directory");
      false
    }
  }
}
