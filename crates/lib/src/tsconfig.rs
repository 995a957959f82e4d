//! Generation of the server compiler configuration.
//!
//! The server build compiles against a dedicated `tsconfig.server.json`
//! written fresh on every run. The document shape is fixed; nothing from a
//! previous run is reused.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::consts::SERVER_TSCONFIG_FILE;

/// Errors that can occur while emitting the configuration.
#[derive(Debug, Error)]
pub enum TsconfigError {
  /// The document could not be serialized.
  #[error("failed to serialize tsconfig: {0}")]
  Serialize(#[from] serde_json::Error),

  /// The configuration file could not be written.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

/// Compiler options for the server build.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
  pub target: String,
  pub module: String,
  pub module_resolution: String,
  pub es_module_interop: bool,
  pub out_dir: String,
  pub root_dir: String,
  pub strict: bool,
  pub skip_lib_check: bool,
  pub force_consistent_casing_in_file_names: bool,
  pub resolve_json_module: bool,
}

/// The configuration document consumed by the server compiler.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTsconfig {
  pub compiler_options: CompilerOptions,
  pub include: Vec<String>,
  pub exclude: Vec<String>,
}

impl ServerTsconfig {
  /// The fixed document for server compilation.
  ///
  /// Modules resolve NodeNext-style against the current runtime; output
  /// lands in `./dist`; strict checking is on while third-party
  /// declaration files are skipped.
  pub fn server_defaults() -> Self {
    Self {
      compiler_options: CompilerOptions {
        target: "ES2020".to_string(),
        module: "NodeNext".to_string(),
        module_resolution: "NodeNext".to_string(),
        es_module_interop: true,
        out_dir: "./dist".to_string(),
        root_dir: "./".to_string(),
        strict: true,
        skip_lib_check: true,
        force_consistent_casing_in_file_names: true,
        resolve_json_module: true,
      },
      include: vec!["server/**/*.ts".to_string(), "shared/**/*.ts".to_string()],
      exclude: vec!["node_modules".to_string(), "dist".to_string()],
    }
  }
}

/// Write the server compiler configuration into the project root.
///
/// Overwrites any prior content unconditionally. The server compiler must
/// not be invoked unless this call has succeeded in the same run.
///
/// # Returns
///
/// The path of the written configuration file.
pub async fn emit_server_tsconfig(project_root: &Path) -> Result<PathBuf, TsconfigError> {
  let config = ServerTsconfig::server_defaults();
  let json = serde_json::to_string_pretty(&config)?;

  let path = project_root.join(SERVER_TSCONFIG_FILE);
  tokio::fs::write(&path, json).await?;

  debug!(path = %path.display(), "server tsconfig written");
  Ok(path)
}
