//! Popup input handlers.

use anyhow::Result;
use crossterm::event;

use crate::tui::{ActiveComponent, AppState, Component, ComponentEvent};

/// Route input to the active popup component
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(ActiveComponent::HelpOverlay(help)) = state.active_component.as_mut() else {
        // Popup without a component: drop it
        state.close_component();
        return Ok(false);
    };

    match help.handle_input(key) {
        Some(ComponentEvent::Closed) => {
            state.close_component();
            Ok(false)
        }
        Some(ComponentEvent::QuitRequested) => {
            state.should_quit = true;
            Ok(true)
        }
        None => Ok(false),
    }
}
