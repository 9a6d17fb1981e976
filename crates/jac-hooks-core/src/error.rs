// Rust guideline compliant 2026-10-12

//! Error types for the Jac hooks core library.

use thiserror::Error;

/// Result type alias for hook operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes used by the hook binaries.
///
/// When the external tool runs, its own exit code is forwarded unchanged.
/// These constants only cover outcomes decided by the wrapper itself.
pub mod exit_codes {
    /// The tool succeeded, or there was nothing to do.
    pub const SUCCESS: i32 = 0;

    /// Files were rewritten and `fail_on_change` is enabled.
    pub const CHANGED: i32 = 1;

    /// Wrapper error: bad configuration, unreadable file, or bad arguments.
    pub const TOOL_ERROR: i32 = 2;

    /// The external tool exists but cannot be executed.
    pub const NOT_EXECUTABLE: i32 = 126;

    /// The external tool cannot be found.
    pub const NOT_FOUND: i32 = 127;
}

/// Error types for hook operations.
///
/// A failing format or type check is not an error: the tool's exit code is
/// carried back to the caller as data.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The external tool could not be located.
    #[error("External tool not found: {0}")]
    ToolNotFound(String),

    /// The external tool was found but is not executable.
    #[error("External tool is not executable: {0}")]
    ToolNotExecutable(String),

    /// Spawning or waiting on the external tool failed.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// Program that was being started.
        program: String,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value or file.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns the process exit code the wrapper reports for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ToolNotFound(_) => exit_codes::NOT_FOUND,
            Error::ToolNotExecutable(_) => exit_codes::NOT_EXECUTABLE,
            Error::Io(_) | Error::Spawn { .. } | Error::InvalidConfig(_) => {
                exit_codes::TOOL_ERROR
            }
        }
    }
}
