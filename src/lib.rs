//! Daytona Motos showroom library
//!
//! Core functionality for the Daytona terminal showroom: loading the
//! motorcycle catalog, browsing brands by displacement, free-text search,
//! lead capture with messaging deep links, and the theme preference.
//! The terminal UI and the headless CLI are thin layers over these modules.

// Module declarations
pub mod app;
pub mod branding;
pub mod cli;
pub mod config;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;
