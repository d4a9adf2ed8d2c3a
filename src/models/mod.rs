//! Data models for the dealership catalog.
//!
//! This module contains the core data structures used throughout the application.
//! Models are designed to be independent of UI and business logic.

pub mod brand;
pub mod catalog;
pub mod hero;
pub mod search_result;

// Re-export all model types
pub use brand::{Brand, Model, PLACEHOLDER_IMAGE};
pub use catalog::{Catalog, ModelKey};
pub use hero::{default_slides, HeroSlide};
pub use search_result::{MatchKind, SearchResult};
