// Rust guideline compliant 2026-10-15

//! CLI entry point for the Jac check hook.

use clap::Parser;
use jac_hooks::cli::{self, CheckArgs};

fn main() {
    std::process::exit(cli::run_check(CheckArgs::parse()));
}
