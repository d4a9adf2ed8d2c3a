//! Action handlers grouped by area of the screen.

pub mod navigation;
pub mod overlays;
pub mod panel;
