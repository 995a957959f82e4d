//! Fixed commands, paths, and environment variable names.

/// Default command used to bundle the client.
pub const CLIENT_BUILD_COMMAND: &str = "npx vite build";

/// Default command used to compile the server.
///
/// References the configuration file written by [`crate::tsconfig`]
/// immediately before this command runs.
pub const SERVER_BUILD_COMMAND: &str = "npx tsc -p tsconfig.server.json";

/// Output directory for compiled artifacts, relative to the project root.
pub const DIST_DIR: &str = "dist";

/// File name of the generated server compiler configuration.
pub const SERVER_TSCONFIG_FILE: &str = "tsconfig.server.json";

/// Environment variable overriding the client build command.
pub const CLIENT_COMMAND_ENV: &str = "DUPLEX_CLIENT_CMD";

/// Environment variable overriding the server build command.
pub const SERVER_COMMAND_ENV: &str = "DUPLEX_SERVER_CMD";
