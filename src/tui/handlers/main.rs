//! Keyboard entry point and text input for the search bar and lead form.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::events::ShowroomEvent;
use crate::tui::help_registry::contexts;
use crate::tui::{AppState, LeadField};

/// Handle a key press. Returns true when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Some platforms report key releases too
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        return Ok(false);
    }

    if state.active_popup.is_some() {
        return super::handle_popup_input(state, key);
    }

    let context = state.context();
    if let Some(action) = state.shortcuts.lookup(context, key) {
        return super::dispatch_action(state, action);
    }

    match context {
        contexts::SEARCH => handle_search_text(state, key),
        contexts::LEAD => handle_lead_text(state, key),
        // No action mapped - ignore key
        _ => Ok(false),
    }
}

fn typed_char(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn handle_search_text(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let mut query = state.showroom.search().query.clone();
    if let Some(c) = typed_char(key) {
        query.push(c);
    } else if key.code == KeyCode::Backspace {
        if query.pop().is_none() {
            return Ok(false);
        }
    } else {
        return Ok(false);
    }
    state.result_cursor = 0;
    state.dispatch(ShowroomEvent::SetQuery(query));
    Ok(false)
}

fn handle_lead_text(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let field = state.lead_field;
    let lead = state.showroom.lead_mut();
    let input = match field {
        LeadField::Name => &mut lead.name,
        LeadField::Phone => &mut lead.phone,
        LeadField::Owner | LeadField::Partner => return Ok(false),
    };
    if let Some(c) = typed_char(key) {
        input.push(c);
    } else if key.code == KeyCode::Backspace {
        input.pop();
    }
    Ok(false)
}
