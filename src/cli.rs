// Rust guideline compliant 2026-10-15

//! Command-line front end shared by the `jac-format` and `jac-check` binaries.
//!
//! pre-commit appends the matched file names after any `args:` configured for
//! the hook, so every option here is optional and files are positional.

use crate::{check_hook, format_hook, logging, HookOutcome};
use anyhow::Context;
use clap::{Args, Parser};
use jac_hooks_core::{exit_codes, Config, FileSet, HookKind, Runner, Toolchain};
use std::path::PathBuf;

/// Options accepted by both hooks.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Jac source files to process
    pub files: Vec<PathBuf>,

    /// External Jac executable
    #[arg(long, value_name = "PATH")]
    pub tool: Option<String>,

    /// Config file (defaults to ./jac-hooks.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level for the wrapper's own diagnostics
    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: Option<String>,

    /// Suppress summary lines
    #[arg(short, long)]
    pub quiet: bool,
}

/// `jac-format` arguments.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "jac-format",
    version,
    about = "Format Jac files in place with `jac format`",
    after_help = "Exit status is the exit status of `jac format`."
)]
pub struct FormatArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Exit 1 when any file was rewritten
    #[arg(long)]
    pub fail_on_change: bool,
}

/// `jac-check` arguments.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "jac-check",
    version,
    about = "Type check Jac files with `jac check`",
    after_help = "Exit status is the exit status of `jac check`."
)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Entry point for `jac-format`.
///
/// Returns the process exit code. Callers pass it to [`std::process::exit`]
/// so codes outside `0..=255` are not truncated on platforms that keep them.
pub fn run_format(args: FormatArgs) -> i32 {
    execute(HookKind::Format, &args.common, args.fail_on_change)
}

/// Entry point for `jac-check`.
pub fn run_check(args: CheckArgs) -> i32 {
    execute(HookKind::Check, &args.common, false)
}

fn execute(kind: HookKind, common: &CommonArgs, fail_on_change: bool) -> i32 {
    // Nothing to forward: succeed without consulting config or the tool.
    if common.files.is_empty() {
        if !common.quiet {
            eprintln!("Usage: {kind} <file.jac> [file2.jac ...]");
        }
        return exit_codes::SUCCESS;
    }

    let config = match load_config(common, fail_on_change) {
        Ok(config) => config,
        Err(err) => return fail(kind, &err),
    };

    let _guard = match logging::init(&config) {
        Ok(guard) => guard,
        Err(err) => return fail(kind, &anyhow::Error::from(err)),
    };

    let toolchain = Toolchain::from_config(&config);
    finish(kind, common, run(&toolchain, kind, common, &config))
}

/// Loads configuration and applies command-line overrides.
///
/// Flags win over environment variables, which win over the config file.
///
/// # Errors
///
/// Returns an error if the config file or environment is invalid, or if an
/// override produces an invalid configuration.
pub fn load_config(common: &CommonArgs, fail_on_change: bool) -> anyhow::Result<Config> {
    let mut config = match &common.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load(&std::env::current_dir()?)?,
    };

    if let Some(tool) = &common.tool {
        config.tool = tool.clone();
    }
    if let Some(level) = &common.log_level {
        config.log_level = level.clone();
    }
    if fail_on_change {
        config.fail_on_change = true;
    }

    config.validate()?;
    Ok(config)
}

/// Selects files and runs the hook for `kind` through `runner`.
///
/// # Errors
///
/// Returns an error if the tool cannot be started or a file cannot be read.
pub fn run(
    runner: &dyn Runner,
    kind: HookKind,
    common: &CommonArgs,
    config: &Config,
) -> anyhow::Result<HookOutcome> {
    let files = FileSet::select(common.files.iter().cloned(), &config.extensions);
    if !files.skipped().is_empty() {
        tracing::debug!(
            skipped = files.skipped().len(),
            "ignoring files without a configured extension"
        );
    }

    let outcome = match kind {
        HookKind::Format => format_hook(runner, &files, config.fail_on_change)?,
        HookKind::Check => check_hook(runner, &files)?,
    };
    tracing::debug!(
        hook = %kind,
        files = outcome.files,
        exit_code = outcome.exit_code,
        "hook finished"
    );
    Ok(outcome)
}

/// Prints the summary for a finished run and returns its exit code.
///
/// The outcome's exit code is returned unchanged.
pub fn finish(kind: HookKind, common: &CommonArgs, result: anyhow::Result<HookOutcome>) -> i32 {
    match result {
        Ok(outcome) => {
            if !common.quiet {
                let mut out = std::io::stdout().lock();
                let mut err = std::io::stderr().lock();
                if let Err(write_err) = outcome.report(&mut out, &mut err) {
                    tracing::warn!(error = %write_err, "failed to write summary");
                }
            }
            outcome.exit_code
        }
        Err(err) => fail(kind, &err),
    }
}

/// Maps a wrapper error to its exit code.
pub fn error_exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<jac_hooks_core::Error>()
        .map_or(exit_codes::TOOL_ERROR, jac_hooks_core::Error::exit_code)
}

fn fail(kind: HookKind, err: &anyhow::Error) -> i32 {
    tracing::debug!(error = ?err, "hook failed");
    eprintln!("{kind}: {err:#}");
    error_exit_code(err)
}
