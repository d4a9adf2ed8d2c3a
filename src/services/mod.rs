//! Service layer for business logic.
//!
//! Each service owns one piece of showroom behavior and is independent of the
//! terminal UI, so it can be driven by the TUI, the CLI and tests alike.

pub mod asset_cache;
pub mod browser;
pub mod catalog_store;
pub mod lead;
pub mod preferences;
pub mod rotator;
pub mod scheduler;
pub mod search;
pub mod theme_controller;
pub mod zoom;

// Re-export commonly used types and functions
pub use asset_cache::{AssetCache, CacheStatus};
pub use browser::{BrandPanel, CatalogBrowser, ModelCard, PanelContent};
pub use catalog_store::{CatalogError, CatalogSource, CatalogStore};
pub use lead::{Contact, Lead, LeadForm};
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use rotator::{RotatorState, SlideRotator};
pub use scheduler::Scheduler;
pub use search::SearchOutcome;
pub use theme_controller::ThemeController;
pub use zoom::ZoomOverlay;
