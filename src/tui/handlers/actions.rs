//! Action dispatch and lead link handling.

use anyhow::Result;
use tracing::warn;

use crate::app::events::{Effect, ShowroomEvent};
use crate::shortcuts::Action;
use crate::tui::help_registry::contexts;
use crate::tui::AppState;

use super::action_handlers::{navigation, overlays, panel};

/// Performs a side effect requested by the showroom.
pub fn apply_effect(state: &mut AppState, effect: Effect) {
    match effect {
        Effect::OpenLink(lead) => {
            let contact = lead.contact.info().name;
            let opened = state.opener.open(&lead.link);
            let copied = state.opener.copy(&lead.link);
            match (opened, copied) {
                (Ok(()), _) => state.set_status(format!("Abriendo WhatsApp con {contact}")),
                (Err(e), Ok(())) => {
                    warn!("Could not open lead link: {e:#}");
                    state.set_status(format!(
                        "No se pudo abrir el navegador. Enlace para {contact} copiado al portapapeles"
                    ));
                }
                (Err(open_err), Err(copy_err)) => {
                    warn!("Could not open lead link: {open_err:#}; clipboard: {copy_err:#}");
                    state.set_error(format!("No se pudo abrir el enlace: {}", lead.link));
                }
            }
        }
    }
}

/// Dispatch action to appropriate handler
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    let context = state.context();
    match action {
        // Navigation
        Action::NavigateUp => navigation::handle_navigate_up(state, context),
        Action::NavigateDown => navigation::handle_navigate_down(state, context),
        Action::NavigateLeft => navigation::handle_navigate_left(state),
        Action::NavigateRight => navigation::handle_navigate_right(state),
        Action::Confirm => navigation::handle_confirm(state, context),

        // Hero
        Action::NextSlide => {
            state.dispatch(ShowroomEvent::NextSlide);
            Ok(false)
        }
        Action::PreviousSlide => {
            state.dispatch(ShowroomEvent::PreviousSlide);
            Ok(false)
        }
        Action::ToggleHeroPause => navigation::handle_toggle_hero_pause(state),

        // Panel
        Action::NextFilter => panel::handle_cycle_filter(state, true),
        Action::PreviousFilter => panel::handle_cycle_filter(state, false),
        Action::NextColor if context == contexts::LEAD => {
            state.dispatch(ShowroomEvent::NextLeadColor);
            Ok(false)
        }
        Action::PreviousColor if context == contexts::LEAD => {
            state.dispatch(ShowroomEvent::PreviousLeadColor);
            Ok(false)
        }
        Action::NextColor => panel::handle_cycle_color(state, true),
        Action::PreviousColor => panel::handle_cycle_color(state, false),
        Action::OpenLead => panel::handle_open_lead(state),
        Action::OpenZoom => panel::handle_open_zoom(state),

        // Lead form
        Action::NextField => {
            state.lead_field = state.lead_field.next();
            Ok(false)
        }
        Action::PreviousField => {
            state.lead_field = state.lead_field.previous();
            Ok(false)
        }

        // Overlays
        Action::ToggleTheme => overlays::handle_toggle_theme(state),
        Action::ToggleSearch => overlays::handle_toggle_search(state),
        Action::CloseZoom => {
            state.dispatch(ShowroomEvent::CloseZoom);
            Ok(false)
        }
        Action::ToggleHelp => overlays::handle_toggle_help(state),

        // General
        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }
        Action::Cancel => {
            state.dispatch(ShowroomEvent::Escape);
            state.set_status("");
            Ok(false)
        }
    }
}
