// Rust guideline compliant 2026-10-12

//! Jac Hooks Core Library
//!
//! Shared building blocks for the `jac-format` and `jac-check` pre-commit hooks:
//! - Configuration (TOML file + `JAC_HOOKS_` environment overrides)
//! - File selection by extension
//! - Content snapshots for detecting in-place rewrites
//! - External toolchain invocation and exit code mapping
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod files;
pub mod snapshot;
pub mod toolchain;

pub use config::{Config, CONFIG_FILE_NAME};
pub use error::{exit_codes, Error, Result};
pub use files::FileSet;
pub use snapshot::Snapshot;
pub use toolchain::{HookKind, Runner, Toolchain};
