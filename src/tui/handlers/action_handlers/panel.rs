// Brand panel action handlers

use anyhow::Result;

use crate::app::events::ShowroomEvent;
use crate::tui::{AppState, LeadField};

/// Step through the displacement filters, wrapping at both ends
pub fn handle_cycle_filter(state: &mut AppState, forward: bool) -> Result<bool> {
    let Some(panel) = state.showroom.browser().panel() else {
        return Ok(false);
    };
    if panel.filters.is_empty() {
        return Ok(false);
    }
    let len = panel.filters.len();
    let current = panel
        .active_filter
        .and_then(|cc| panel.filters.iter().position(|f| *f == cc));
    let next = match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    };
    let cc = panel.filters[next];
    state.card_cursor = 0;
    state.dispatch(ShowroomEvent::SelectDisplacement(cc));
    Ok(false)
}

/// Step through the colors of the focused card
pub fn handle_cycle_color(state: &mut AppState, forward: bool) -> Result<bool> {
    let card = state.card_cursor;
    let browser = state.showroom.browser();
    let Some(key) = browser.card(card).map(|c| c.key.clone()) else {
        return Ok(false);
    };
    let Some(model) = state.showroom.catalog().model(&key) else {
        return Ok(false);
    };
    if model.colors.is_empty() {
        return Ok(false);
    }
    let len = model.colors.len();
    // With nothing chosen the card shows its first color
    let current = browser
        .selected_color(&key)
        .and_then(|label| model.color_index(label))
        .unwrap_or(0);
    let next = if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    };
    let label = model.colors[next].clone();
    state.dispatch(ShowroomEvent::SelectColor {
        card,
        label: label.clone(),
    });
    state.set_status(format!("Color: {label}"));
    Ok(false)
}

/// Open the lead form for the focused card
pub fn handle_open_lead(state: &mut AppState) -> Result<bool> {
    if state.showroom.browser().card(state.card_cursor).is_some() {
        state.lead_field = LeadField::Name;
        state.dispatch(ShowroomEvent::OpenLead {
            card: state.card_cursor,
        });
    }
    Ok(false)
}

/// Zoom the focused card image
pub fn handle_open_zoom(state: &mut AppState) -> Result<bool> {
    if state.showroom.browser().card(state.card_cursor).is_some() {
        state.dispatch(ShowroomEvent::OpenZoom {
            card: state.card_cursor,
        });
    }
    Ok(false)
}
