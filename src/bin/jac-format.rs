// Rust guideline compliant 2026-10-15

//! CLI entry point for the Jac format hook.

use clap::Parser;
use jac_hooks::cli::{self, FormatArgs};

fn main() {
    std::process::exit(cli::run_format(FormatArgs::parse()));
}
