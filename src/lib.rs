// Rust guideline compliant 2026-10-14

//! Jac pre-commit hooks
//!
//! This crate provides the two hook entry points:
//! - `jac-format`: rewrites Jac sources in place with `jac format`
//! - `jac-check`: type checks Jac sources with `jac check`
//!
//! Both forward the external tool's exit code unchanged.

pub mod check;
pub mod cli;
pub mod format;
pub mod logging;
pub mod outcome;

pub use check::check_hook;
pub use format::format_hook;
pub use outcome::HookOutcome;
