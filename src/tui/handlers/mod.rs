//! Input handler modules for different TUI contexts.

pub mod action_handlers;
pub mod actions;
pub mod main;
pub mod mouse;
pub mod popups;

// Re-export handler functions
pub use actions::{apply_effect, dispatch_action};
pub use main::handle_key_event;
pub use mouse::handle_mouse_event;
pub use popups::handle_popup_input;
