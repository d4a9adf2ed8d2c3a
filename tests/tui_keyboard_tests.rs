//! Integration tests for keyboard-driven flows through the terminal UI state.
//!
//! Covers the path a visitor takes without a mouse:
//! - grid cursor, Enter opens the brand panel
//! - Left/Right cycle displacement filters, `c` cycles card colors
//! - `a` opens the lead form, typed text fills it, Enter on a contact submits
//! - `/` opens search, typing filters, Enter picks a result

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use daytona::config::ThemePreference;
use daytona::tui::handlers::handle_key_event;
use daytona::tui::help_registry::contexts;
use daytona::tui::{AppState, LeadField};

mod fixtures;
use fixtures::*;

fn press(state: &mut AppState, code: KeyCode) -> bool {
    handle_key_event(state, key(code)).expect("key handling should not fail")
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

#[test]
fn test_grid_enter_opens_selected_brand() {
    let (mut state, _) = test_app_state();
    assert_eq!(state.context(), contexts::MAIN);

    press(&mut state, KeyCode::Right);
    assert_eq!(state.selected_brand_id().as_deref(), Some("honda"));
    press(&mut state, KeyCode::Enter);

    assert_eq!(state.context(), contexts::PANEL);
    let panel = state.showroom.browser().panel().unwrap();
    assert_eq!(panel.brand_id, "honda");
    assert_eq!(panel.filters, vec![110, 125]);
}

#[test]
fn test_cursor_stays_inside_grid() {
    let (mut state, _) = test_app_state();

    press(&mut state, KeyCode::Left);
    assert_eq!(state.brand_cursor, 0);
    for _ in 0..5 {
        press(&mut state, KeyCode::Right);
    }
    assert_eq!(state.brand_cursor, 2);
    press(&mut state, KeyCode::Down);
    assert_eq!(state.brand_cursor, 2, "only one grid row");
}

#[test]
fn test_filter_cycling_wraps() {
    let (mut state, _) = test_app_state();
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Enter);

    press(&mut state, KeyCode::Right);
    assert_eq!(state.showroom.browser().panel().unwrap().active_filter, Some(110));
    press(&mut state, KeyCode::Right);
    assert_eq!(state.showroom.browser().panel().unwrap().active_filter, Some(125));
    press(&mut state, KeyCode::Right);
    assert_eq!(state.showroom.browser().panel().unwrap().active_filter, Some(110));
    press(&mut state, KeyCode::Left);
    assert_eq!(state.showroom.browser().panel().unwrap().active_filter, Some(125));
}

#[test]
fn test_color_cycling_updates_card_image() {
    let (mut state, _) = test_app_state();
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Right);

    press(&mut state, KeyCode::Char('c'));
    let browser = state.showroom.browser();
    let card = browser.card(0).unwrap();
    assert_eq!(browser.selected_color(&card.key), Some("Negro"));
    assert_eq!(card.image, "images/cg_2.jpg");
    assert_eq!(state.status_message, "Color: Negro");
}

#[test]
fn test_lead_flow_opens_link() {
    let (mut state, opener) = test_app_state();
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Right);

    press(&mut state, KeyCode::Char('a'));
    assert_eq!(state.context(), contexts::LEAD);
    assert_eq!(state.lead_field, LeadField::Name);

    type_text(&mut state, "Ana");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "555");
    press(&mut state, KeyCode::Backspace);
    assert_eq!(state.showroom.lead().name, "Ana");
    assert_eq!(state.showroom.lead().phone, "55");

    press(&mut state, KeyCode::Tab);
    assert_eq!(state.lead_field, LeadField::Owner);
    press(&mut state, KeyCode::Enter);

    let opened = opener.opened();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].contains("Hola%2C%20soy%20Ana."));
    assert!(opened[0].contains("Wave%20110"));
    assert_eq!(opener.copied(), opened);
    assert!(state.status_message.starts_with("Abriendo WhatsApp"));
}

#[test]
fn test_search_typing_and_selection() {
    let (mut state, _) = test_app_state();

    press(&mut state, KeyCode::Char('/'));
    assert_eq!(state.context(), contexts::SEARCH);

    type_text(&mut state, "w");
    assert!(state.showroom.search_results().is_empty(), "one character stays hidden");
    type_text(&mut state, "a");
    assert_eq!(state.showroom.search().query, "wa");
    assert_eq!(state.showroom.search_results().len(), 1);

    press(&mut state, KeyCode::Enter);
    assert_eq!(state.context(), contexts::PANEL);
    assert_eq!(state.showroom.browser().panel().unwrap().brand_id, "honda");
    assert_eq!(state.showroom.pending_tasks(), 1);
}

#[test]
fn test_escape_returns_to_main() {
    let (mut state, _) = test_app_state();
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.context(), contexts::PANEL);

    press(&mut state, KeyCode::Esc);
    assert_eq!(state.context(), contexts::MAIN);
    assert!(!state.showroom.browser().is_open());
}

#[test]
fn test_theme_toggle_key() {
    let (mut state, _) = test_app_state();

    press(&mut state, KeyCode::Char('t'));
    assert_eq!(state.showroom.theme().preference(), ThemePreference::Dark);
    press(&mut state, KeyCode::Char('t'));
    assert_eq!(state.showroom.theme().preference(), ThemePreference::Light);
}

#[test]
fn test_help_overlay_toggles() {
    let (mut state, _) = test_app_state();

    press(&mut state, KeyCode::Char('?'));
    assert_eq!(state.context(), contexts::HELP);
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.context(), contexts::MAIN);
}

#[test]
fn test_quit_keys() {
    let (mut state, _) = test_app_state();
    assert!(press(&mut state, KeyCode::Char('q')));
    assert!(state.should_quit);

    let (mut state, _) = test_app_state();
    press(&mut state, KeyCode::Char('/'));
    let quit = handle_key_event(
        &mut state,
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
    )
    .unwrap();
    assert!(quit);
}
