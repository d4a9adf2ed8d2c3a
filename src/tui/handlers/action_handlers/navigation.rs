// Navigation action handlers

use anyhow::Result;

use crate::app::events::ShowroomEvent;
use crate::services::RotatorState;
use crate::tui::brand_grid::GRID_COLUMNS;
use crate::tui::help_registry::contexts;
use crate::tui::AppState;

fn card_count(state: &AppState) -> usize {
    state
        .showroom
        .browser()
        .panel()
        .map_or(0, |panel| panel.content.cards().len())
}

/// Handle navigate up action
pub fn handle_navigate_up(state: &mut AppState, context: &str) -> Result<bool> {
    match context {
        contexts::PANEL => state.card_cursor = state.card_cursor.saturating_sub(1),
        contexts::SEARCH => state.result_cursor = state.result_cursor.saturating_sub(1),
        _ => {
            if state.brand_cursor >= GRID_COLUMNS {
                state.brand_cursor -= GRID_COLUMNS;
            }
        }
    }
    Ok(false)
}

/// Handle navigate down action
pub fn handle_navigate_down(state: &mut AppState, context: &str) -> Result<bool> {
    match context {
        contexts::PANEL => {
            if state.card_cursor + 1 < card_count(state) {
                state.card_cursor += 1;
            }
        }
        contexts::SEARCH => {
            if state.result_cursor + 1 < state.showroom.search_results().len() {
                state.result_cursor += 1;
            }
        }
        _ => {
            if state.brand_cursor + GRID_COLUMNS < state.showroom.catalog().len() {
                state.brand_cursor += GRID_COLUMNS;
            }
        }
    }
    Ok(false)
}

/// Handle navigate left action
pub fn handle_navigate_left(state: &mut AppState) -> Result<bool> {
    state.brand_cursor = state.brand_cursor.saturating_sub(1);
    Ok(false)
}

/// Handle navigate right action
pub fn handle_navigate_right(state: &mut AppState) -> Result<bool> {
    if state.brand_cursor + 1 < state.showroom.catalog().len() {
        state.brand_cursor += 1;
    }
    Ok(false)
}

/// Handle confirm: open brand, pick search result, or submit the lead
pub fn handle_confirm(state: &mut AppState, context: &str) -> Result<bool> {
    match context {
        contexts::SEARCH => {
            let index = state.result_cursor;
            if index < state.showroom.search_results().len() {
                state.card_cursor = 0;
                state.dispatch(ShowroomEvent::SelectResult(index));
            }
        }
        contexts::LEAD => {
            if let Some(contact) = state.lead_field.contact() {
                state.dispatch(ShowroomEvent::SubmitLead(contact));
            } else {
                state.lead_field = state.lead_field.next();
            }
        }
        _ => {
            if let Some(brand_id) = state.selected_brand_id() {
                state.card_cursor = 0;
                state.dispatch(ShowroomEvent::OpenBrand(brand_id));
            }
        }
    }
    Ok(false)
}

/// Pause or resume the hero from the keyboard
pub fn handle_toggle_hero_pause(state: &mut AppState) -> Result<bool> {
    if state.showroom.rotator().state() == RotatorState::Paused {
        state.dispatch(ShowroomEvent::PointerLeaveHero);
        state.set_status("Promociones en reproducción");
    } else {
        state.dispatch(ShowroomEvent::PointerEnterHero);
        state.set_status("Promociones en pausa");
    }
    Ok(false)
}
