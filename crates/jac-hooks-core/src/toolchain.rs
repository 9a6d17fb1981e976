// Rust guideline compliant 2026-10-13

//! Invocation of the external Jac toolchain.
//!
//! The toolchain owns all formatting and type-checking logic. This module only
//! builds the command line, waits for the process and maps its exit status.

use crate::{Config, Error, Result};
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// The two hook flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    /// Rewrites files in place with `<tool> format`.
    Format,
    /// Type checks files with `<tool> check`.
    Check,
}

impl HookKind {
    /// Subcommand passed to the external tool.
    pub fn subcommand(self) -> &'static str {
        match self {
            HookKind::Format => "format",
            HookKind::Check => "check",
        }
    }

    /// Name of the hook binary and pre-commit hook id.
    pub fn binary_name(self) -> &'static str {
        match self {
            HookKind::Format => "jac-format",
            HookKind::Check => "jac-check",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary_name())
    }
}

/// Runs one hook subcommand over a file list.
///
/// Implementations block until the work is finished and return the exit code
/// to forward.
pub trait Runner {
    /// Runs `kind` over `files` and returns the resulting exit code.
    ///
    /// # Errors
    ///
    /// Returns an error if the work could not be started at all.
    fn run(&self, kind: HookKind, files: &[PathBuf]) -> Result<i32>;
}

/// The external `jac` executable plus per-subcommand extra arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    program: String,
    format_args: Vec<String>,
    check_args: Vec<String>,
}

impl Toolchain {
    /// Creates a toolchain for `program` with no extra arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format_args: Vec::new(),
            check_args: Vec::new(),
        }
    }

    /// Creates a toolchain from the configured tool and extra arguments.
    pub fn from_config(config: &Config) -> Self {
        Self {
            program: config.tool.clone(),
            format_args: config.format_args.clone(),
            check_args: config.check_args.clone(),
        }
    }

    /// Sets the extra arguments placed before the file list for `kind`.
    #[must_use]
    pub fn with_args(mut self, kind: HookKind, args: Vec<String>) -> Self {
        match kind {
            HookKind::Format => self.format_args = args,
            HookKind::Check => self.check_args = args,
        }
        self
    }

    /// Builds `<program> <subcommand> [extra args] <files>`.
    ///
    /// Standard streams are inherited so the tool's diagnostics reach the user
    /// unchanged.
    pub fn command(&self, kind: HookKind, files: &[PathBuf]) -> Command {
        let extra = match kind {
            HookKind::Format => &self.format_args,
            HookKind::Check => &self.check_args,
        };
        let mut command = Command::new(&self.program);
        command.arg(kind.subcommand()).args(extra).args(files);
        command
    }

    fn spawn_error(&self, err: io::Error) -> Error {
        match err.kind() {
            io::ErrorKind::NotFound => Error::ToolNotFound(self.program.clone()),
            io::ErrorKind::PermissionDenied => Error::ToolNotExecutable(self.program.clone()),
            _ => Error::Spawn {
                program: self.program.clone(),
                source: err,
            },
        }
    }
}

impl Runner for Toolchain {
    fn run(&self, kind: HookKind, files: &[PathBuf]) -> Result<i32> {
        let mut command = self.command(kind, files);
        tracing::debug!(
            program = %self.program,
            subcommand = kind.subcommand(),
            files = files.len(),
            "running external tool"
        );

        let status = command.status().map_err(|err| self.spawn_error(err))?;
        let code = status_code(status);
        tracing::debug!(code, "external tool exited");
        Ok(code)
    }
}

/// Maps a process exit status to a shell-style exit code.
///
/// A process killed by a signal reports `128 + signal` on Unix.
pub fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
