// Rust guideline compliant 2026-10-14

//! Result of a single hook run and its user-facing summary.

use jac_hooks_core::{exit_codes, HookKind};
use std::io::{self, Write};
use std::path::PathBuf;

/// What happened during one hook run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookOutcome {
    /// Which hook ran.
    pub kind: HookKind,
    /// Number of files forwarded to the tool.
    pub files: usize,
    /// The tool's exit code, or `None` when the tool was not started.
    pub tool_code: Option<i32>,
    /// Files whose content changed during the run.
    pub changed: Vec<PathBuf>,
    /// Exit code the wrapper reports.
    pub exit_code: i32,
}

impl HookOutcome {
    /// Outcome for a run with nothing to forward.
    pub fn not_run(kind: HookKind) -> Self {
        Self {
            kind,
            files: 0,
            tool_code: None,
            changed: Vec::new(),
            exit_code: exit_codes::SUCCESS,
        }
    }

    /// Whether the external tool was started.
    pub fn tool_ran(&self) -> bool {
        self.tool_code.is_some()
    }

    /// Whether the wrapper reports success.
    pub fn succeeded(&self) -> bool {
        self.exit_code == exit_codes::SUCCESS
    }

    /// Writes the wrapper's summary lines.
    ///
    /// The format hook lists rewritten files on `out`. The check hook prints a
    /// pass line on `out` or a failure line on `err`. The tool's own
    /// diagnostics are not repeated.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn report(&self, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<()> {
        if !self.tool_ran() {
            return Ok(());
        }

        match self.kind {
            HookKind::Format => {
                for path in &self.changed {
                    writeln!(out, "Formatted: {}", path.display())?;
                }
            }
            HookKind::Check if self.succeeded() => {
                writeln!(out, "Type check passed: {} file(s) checked", self.files)?;
            }
            HookKind::Check => {
                writeln!(err, "Type check failed in {} file(s)", self.files)?;
            }
        }
        Ok(())
    }
}
