//! Application orchestration layer
//!
//! This module holds the UI-independent showroom core and the functions that
//! coordinate it with the terminal, configuration and the platform.

/// User events, deferred tasks and side effects
pub mod events;

/// Showroom startup with the configured catalog and preferences
pub mod launch;

/// Opening lead links and copying them to the clipboard
pub mod link;

pub mod showroom;

// Re-export commonly used items for convenience
pub use events::{Deferred, Effect, ShowroomEvent};
pub use launch::{launch_showroom, preference_store, SitePaths};
pub use link::{LinkOpener, RecordingLinkOpener, SystemLinkOpener};
pub use showroom::{SearchBar, Showroom};
