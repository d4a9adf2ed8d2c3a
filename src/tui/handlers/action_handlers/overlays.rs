// Theme, search and help toggles

use anyhow::Result;

use crate::app::events::ShowroomEvent;
use crate::config::ThemePreference;
use crate::tui::{AppState, PopupType};

/// Flip between light and dark
pub fn handle_toggle_theme(state: &mut AppState) -> Result<bool> {
    state.dispatch(ShowroomEvent::ToggleTheme);
    let label = match state.showroom.theme().preference() {
        ThemePreference::Dark => "oscuro",
        ThemePreference::Light => "claro",
    };
    state.set_status(format!("Tema {label}"));
    Ok(false)
}

/// Show or hide the search bar
pub fn handle_toggle_search(state: &mut AppState) -> Result<bool> {
    state.result_cursor = 0;
    state.dispatch(ShowroomEvent::ToggleSearch);
    Ok(false)
}

/// Open the help overlay (closing is handled by the component)
pub fn handle_toggle_help(state: &mut AppState) -> Result<bool> {
    if state.active_popup == Some(PopupType::HelpOverlay) {
        state.close_component();
    } else {
        state.open_help_overlay();
    }
    Ok(false)
}
