// Rust guideline compliant 2026-10-12

//! Configuration management for the Jac hooks.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no explicit config is given.
pub const CONFIG_FILE_NAME: &str = "jac-hooks.toml";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for hook behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// External toolchain executable (name on `PATH` or a path).
    #[serde(default = "default_tool")]
    pub tool: String,

    /// File extensions forwarded to the tool, with or without a leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Extra arguments placed between `format` and the file list.
    #[serde(default)]
    pub format_args: Vec<String>,

    /// Extra arguments placed between `check` and the file list.
    #[serde(default)]
    pub check_args: Vec<String>,

    /// Whether the format hook exits 1 when it rewrote any file.
    #[serde(default)]
    pub fail_on_change: bool,

    /// Log level for the wrapper's own diagnostics.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional file that receives log output instead of stderr.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_tool() -> String {
    "jac".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["jac".to_string()]
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            extensions: default_extensions(),
            format_args: Vec::new(),
            check_args: Vec::new(),
            fail_on_change: false,
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from a directory and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. `jac-hooks.toml` in `dir`, if it exists
    /// 3. Environment variables with `JAC_HOOKS_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file exists but cannot be read
    /// - The configuration file contains invalid TOML
    /// - An environment variable or the resulting configuration is invalid
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let config = if config_path.is_file() {
            Self::read_file(&config_path)?
        } else {
            Self::default()
        };
        config.finish()
    }

    /// Loads configuration from an explicit file and environment variables.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting configuration is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::read_file(path)?.finish()
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    fn finish(mut self) -> Result<Self> {
        self.apply_env_overrides()?;
        self.normalize();
        self.validate()?;
        Ok(self)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `JAC_HOOKS_TOOL` - External tool executable
    /// - `JAC_HOOKS_EXTENSIONS` - Comma-separated extension list
    /// - `JAC_HOOKS_FAIL_ON_CHANGE` - Fail the format hook on rewrites (true/false)
    /// - `JAC_HOOKS_LOG_LEVEL` - Log level (error/warn/info/debug/trace)
    /// - `JAC_HOOKS_LOG_FILE` - Log file path
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("JAC_HOOKS_TOOL") {
            self.tool = val;
        }

        if let Ok(val) = std::env::var("JAC_HOOKS_EXTENSIONS") {
            self.extensions = val.split(',').map(|ext| ext.trim().to_string()).collect();
        }

        if let Ok(val) = std::env::var("JAC_HOOKS_FAIL_ON_CHANGE") {
            self.fail_on_change = val.parse().map_err(|_| {
                Error::InvalidConfig("JAC_HOOKS_FAIL_ON_CHANGE must be true or false".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("JAC_HOOKS_LOG_LEVEL") {
            self.log_level = val;
        }

        if let Ok(val) = std::env::var("JAC_HOOKS_LOG_FILE") {
            self.log_file = Some(PathBuf::from(val));
        }

        Ok(())
    }

    fn normalize(&mut self) {
        for ext in &mut self.extensions {
            if let Some(stripped) = ext.strip_prefix('.') {
                *ext = stripped.to_string();
            }
        }
        self.log_level = self.log_level.to_lowercase();
    }

    /// Validates the configuration values.
    ///
    /// Callers that override fields after loading (for example from CLI flags)
    /// should validate again.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tool` is empty
    /// - `extensions` is empty or contains an empty entry
    /// - `log_level` is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.tool.trim().is_empty() {
            return Err(Error::InvalidConfig("tool must not be empty".to_string()));
        }

        if self.extensions.is_empty() {
            return Err(Error::InvalidConfig(
                "extensions must list at least one extension".to_string(),
            ));
        }

        if self
            .extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').is_empty())
        {
            return Err(Error::InvalidConfig(
                "extensions must not contain empty entries".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }
}
