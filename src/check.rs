// Rust guideline compliant 2026-10-14

//! Check hook implementation.

use crate::HookOutcome;
use jac_hooks_core::{FileSet, HookKind, Result, Runner};

/// Runs the check hook.
///
/// The type checker is read-only, so no snapshot is taken.
///
/// # Errors
///
/// Returns an error if the type checker cannot be started.
pub fn check_hook(runner: &dyn Runner, files: &FileSet) -> Result<HookOutcome> {
    if files.is_empty() {
        return Ok(HookOutcome::not_run(HookKind::Check));
    }

    let tool_code = runner.run(HookKind::Check, files.selected())?;
    Ok(HookOutcome {
        kind: HookKind::Check,
        files: files.len(),
        tool_code: Some(tool_code),
        changed: Vec::new(),
        exit_code: tool_code,
    })
}
