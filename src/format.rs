// Rust guideline compliant 2026-10-14

//! Format hook implementation.
//!
//! Runs `jac format` over the selected files and reports which ones it rewrote.

use crate::HookOutcome;
use jac_hooks_core::{exit_codes, FileSet, HookKind, Result, Runner, Snapshot};

/// Runs the format hook.
///
/// # Arguments
///
/// * `runner` - Runs the external formatter
/// * `files` - Files selected for formatting
/// * `fail_on_change` - Exit 1 when the formatter succeeded but rewrote files
///
/// # Returns
///
/// The outcome, whose exit code is the formatter's own unless
/// `fail_on_change` applies. With no files the formatter is not started.
///
/// # Errors
///
/// Returns an error if:
/// - A selected file exists but cannot be read
/// - The formatter cannot be started
pub fn format_hook(
    runner: &dyn Runner,
    files: &FileSet,
    fail_on_change: bool,
) -> Result<HookOutcome> {
    if files.is_empty() {
        return Ok(HookOutcome::not_run(HookKind::Format));
    }

    let before = Snapshot::capture(files.selected())?;
    let tool_code = runner.run(HookKind::Format, files.selected())?;
    let after = Snapshot::capture(files.selected())?;
    let changed = before.changed_since(&after);

    let exit_code = if fail_on_change && tool_code == exit_codes::SUCCESS && !changed.is_empty() {
        tracing::info!(changed = changed.len(), "formatter rewrote files");
        exit_codes::CHANGED
    } else {
        tool_code
    };

    Ok(HookOutcome {
        kind: HookKind::Format,
        files: files.len(),
        tool_code: Some(tool_code),
        changed,
        exit_code,
    })
}
