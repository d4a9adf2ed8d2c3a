//! Shared CLI plumbing: errors, exit codes, catalog context and JSON output.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::app::SitePaths;
use crate::config::Config;
use crate::services::CatalogStore;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input: unknown brand or model, invalid theme
    UserError = 1,
    /// Filesystem or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code for `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// CLI command failure.
#[derive(Debug, Error)]
pub enum CliError {
    /// User input was rejected
    #[error("{0}")]
    Validation(String),
    /// Reading or writing failed
    #[error("{0}")]
    Io(String),
}

impl CliError {
    /// Rejected input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Filesystem or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::UserError,
            Self::Io(_) => ExitCode::IoError,
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Global flags every subcommand can use.
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    /// Loaded configuration
    pub config: Config,
    /// `--root` override
    pub root: Option<PathBuf>,
    /// `--catalog` override
    pub catalog: Option<PathBuf>,
}

impl CliContext {
    /// Site root and catalog after overrides.
    #[must_use]
    pub fn paths(&self) -> SitePaths {
        SitePaths::resolve(&self.config, self.root.as_deref(), self.catalog.as_deref())
    }

    /// Loads the catalog, falling back to the embedded data on failure.
    #[must_use]
    pub fn load_store(&self) -> CatalogStore {
        CatalogStore::load(&self.paths().catalog)
    }
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
