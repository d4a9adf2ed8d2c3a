//! CLI command handlers for Daytona.
//!
//! This module provides headless, scriptable access to the showroom's core
//! operations for automation and testing.

pub mod brands;
pub mod browse;
pub mod common;
pub mod lead;
pub mod search;
pub mod theme;

// Re-export types used by main.rs and tests
pub use brands::BrandsArgs;
pub use browse::BrowseArgs;
pub use common::{CliContext, CliError, CliResult, ExitCode};
pub use lead::LeadArgs;
pub use search::SearchArgs;
pub use theme::ThemeArgs;
