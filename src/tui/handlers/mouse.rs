//! Mouse input: hero hover and swipe, clicks on every clickable region.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::app::events::ShowroomEvent;
use crate::tui::brand_panel::PanelHit;
use crate::tui::hero::HeroArrow;
use crate::tui::{
    centered_rect, search_bar, title_buttons, AppState, BrandGrid, BrandPanelView, HeroBanner,
    LeadField, LeadModal, ScreenLayout, SearchPopup,
};

/// Approximate pixel size of a terminal cell, for swipe distances.
pub const CELL_WIDTH_PX: f32 = 8.0;
/// Approximate pixel height of a terminal cell.
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Clickable buttons in the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TitleButton {
    Search,
    Theme,
}

/// Handle a mouse event
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) -> Result<()> {
    let position = Position::new(mouse.column, mouse.row);
    let layout = ScreenLayout::compute(state.viewport);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            update_hover(state, &layout, position);
        }
        MouseEventKind::Down(MouseButton::Left) => handle_click(state, &layout, position),
        MouseEventKind::Up(MouseButton::Left) => finish_drag(state, position),
        MouseEventKind::ScrollDown => scroll(state, true),
        MouseEventKind::ScrollUp => scroll(state, false),
        _ => {}
    }
    Ok(())
}

/// True when an overlay sits on top of `position`.
fn covered(state: &AppState, layout: &ScreenLayout, position: Position) -> bool {
    let showroom = &state.showroom;
    if state.active_popup.is_some()
        || state.error_message.is_some()
        || showroom.lead().is_open()
        || showroom.zoom().is_visible()
    {
        return true;
    }
    if showroom.browser().is_open() && layout.panel().contains(position) {
        return true;
    }
    showroom.search().open && search_bar::popup_area(layout, state).contains(position)
}

fn update_hover(state: &mut AppState, layout: &ScreenLayout, position: Position) {
    let over_hero = layout.hero.contains(position) && !covered(state, layout, position);
    if over_hero == state.pointer.hero_hovered {
        return;
    }
    state.pointer.hero_hovered = over_hero;
    if over_hero {
        state.dispatch(ShowroomEvent::PointerEnterHero);
    } else {
        state.pointer.drag_origin = None;
        state.dispatch(ShowroomEvent::PointerLeaveHero);
    }
}

fn finish_drag(state: &mut AppState, position: Position) {
    let Some((x, y)) = state.pointer.drag_origin.take() else {
        return;
    };
    let delta_x = (f32::from(position.x) - f32::from(x)) * CELL_WIDTH_PX;
    let delta_y = (f32::from(position.y) - f32::from(y)) * CELL_HEIGHT_PX;
    if delta_x != 0.0 || delta_y != 0.0 {
        state.dispatch(ShowroomEvent::Swipe { delta_x, delta_y });
    }
}

fn title_button_at(state: &AppState, area: Rect, position: Position) -> Option<TitleButton> {
    let inner_right = area.right().saturating_sub(1);
    if position.y != area.y + 1 || position.x >= inner_right {
        return None;
    }
    let [search, theme] = title_buttons(state);
    let theme_start = inner_right.saturating_sub(theme.chars().count() as u16);
    let search_start = theme_start.saturating_sub(search.chars().count() as u16);
    if position.x >= theme_start {
        Some(TitleButton::Theme)
    } else if position.x >= search_start {
        Some(TitleButton::Search)
    } else {
        None
    }
}

fn handle_click(state: &mut AppState, layout: &ScreenLayout, position: Position) {
    if state.error_message.is_some() {
        state.clear_error();
        return;
    }
    if state.active_popup.is_some() {
        return;
    }

    if state.showroom.zoom().is_visible() {
        state.dispatch(ShowroomEvent::CloseZoom);
        return;
    }

    if state.showroom.lead().is_open() {
        click_lead(state, position);
        return;
    }

    if state.showroom.search().open {
        let area = search_bar::popup_area(layout, state);
        if area.contains(position) {
            if let Some(index) = SearchPopup::result_at(area, state, position.x, position.y) {
                state.result_cursor = index;
                state.card_cursor = 0;
                state.dispatch(ShowroomEvent::SelectResult(index));
            }
        } else {
            state.dispatch(ShowroomEvent::ToggleSearch);
        }
        return;
    }

    if let Some(button) = title_button_at(state, layout.title, position) {
        let event = match button {
            TitleButton::Search => {
                state.result_cursor = 0;
                ShowroomEvent::ToggleSearch
            }
            TitleButton::Theme => ShowroomEvent::ToggleTheme,
        };
        state.dispatch(event);
        return;
    }

    if state.showroom.browser().is_open() {
        click_panel(state, layout.panel(), position);
        return;
    }

    if layout.hero.contains(position) {
        match HeroBanner::arrow_at(layout.hero, position.x) {
            Some(HeroArrow::Previous) => state.dispatch(ShowroomEvent::PreviousSlide),
            Some(HeroArrow::Next) => state.dispatch(ShowroomEvent::NextSlide),
            None => state.pointer.drag_origin = Some((position.x, position.y)),
        }
        return;
    }

    if let Some(index) = BrandGrid::cell_at(layout.grid, state, position.x, position.y) {
        state.brand_cursor = index;
        if let Some(brand_id) = state.selected_brand_id() {
            state.card_cursor = 0;
            state.dispatch(ShowroomEvent::OpenBrand(brand_id));
        }
    }
}

fn click_panel(state: &mut AppState, area: Rect, position: Position) {
    let Some(hit) = BrandPanelView::hit_test(area, state, position.x, position.y) else {
        // Click on the dimmed page behind the panel
        state.dispatch(ShowroomEvent::ClosePanel);
        return;
    };
    match hit {
        PanelHit::Filter(cc) => {
            state.card_cursor = 0;
            state.dispatch(ShowroomEvent::SelectDisplacement(cc));
        }
        PanelHit::Swatch { card, label } => {
            state.card_cursor = card;
            state.dispatch(ShowroomEvent::SelectColor { card, label });
        }
        PanelHit::Lead(card) => {
            state.card_cursor = card;
            state.lead_field = LeadField::Name;
            state.dispatch(ShowroomEvent::OpenLead { card });
        }
        PanelHit::Card(card) => {
            state.card_cursor = card;
            state.dispatch(ShowroomEvent::OpenZoom { card });
        }
        PanelHit::Background => {}
    }
}

fn click_lead(state: &mut AppState, position: Position) {
    let area = centered_rect(60, 70, state.viewport);
    if !area.contains(position) {
        state.dispatch(ShowroomEvent::CloseLead);
        return;
    }
    let Some(field) = LeadModal::field_at(area, position.y) else {
        return;
    };
    state.lead_field = field;
    if let Some(contact) = field.contact() {
        state.dispatch(ShowroomEvent::SubmitLead(contact));
    }
}

fn scroll(state: &mut AppState, down: bool) {
    let (cursor, len) = if state.showroom.search().open {
        (&mut state.result_cursor, state.showroom.search_results().len())
    } else if let Some(panel) = state.showroom.browser().panel() {
        (&mut state.card_cursor, panel.content.cards().len())
    } else {
        return;
    };
    if down {
        if *cursor + 1 < len {
            *cursor += 1;
        }
    } else {
        *cursor = cursor.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    use crate::app::link::RecordingLinkOpener;
    use crate::app::showroom::Showroom;
    use crate::models::{Brand, Catalog, Model};
    use crate::services::{AssetCache, CatalogStore, MemoryPreferenceStore, RotatorState};
    use crossterm::event::KeyModifiers;

    fn state() -> AppState {
        let mut catalog = Catalog::new();
        catalog.insert(
            "honda",
            Brand {
                name: "Honda".to_string(),
                logo_path: "motos/honda/logo.png".to_string(),
                models: vec![Model::new("CG 125", 125, &["Rojo"], &["images/cg.jpg"])],
            },
        );
        let showroom = Showroom::new(
            CatalogStore::from_catalog(catalog),
            Box::new(MemoryPreferenceStore::new()),
            Duration::from_secs(5),
            Instant::now(),
        );
        let mut state = AppState::new(
            showroom,
            AssetCache::disabled(),
            Box::new(RecordingLinkOpener::new()),
        );
        state.viewport = Rect::new(0, 0, 100, 40);
        state
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_hover_pauses_and_leave_resumes() {
        let mut state = state();
        handle_mouse_event(&mut state, mouse(MouseEventKind::Moved, 50, 5)).unwrap();
        assert!(state.pointer.hero_hovered);
        assert_eq!(state.showroom.rotator().state(), RotatorState::Paused);

        handle_mouse_event(&mut state, mouse(MouseEventKind::Moved, 50, 20)).unwrap();
        assert!(!state.pointer.hero_hovered);
        assert_eq!(state.showroom.rotator().state(), RotatorState::AutoPlaying);
    }

    #[test]
    fn test_drag_left_advances_slide() {
        let mut state = state();
        handle_mouse_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 60, 5))
            .unwrap();
        assert_eq!(state.pointer.drag_origin, Some((60, 5)));
        handle_mouse_event(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), 50, 5))
            .unwrap();
        assert_eq!(state.showroom.rotator().current(), 1);
    }

    #[test]
    fn test_short_drag_keeps_slide() {
        let mut state = state();
        handle_mouse_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 60, 5))
            .unwrap();
        handle_mouse_event(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), 55, 5))
            .unwrap();
        assert_eq!(state.showroom.rotator().current(), 0);
    }

    #[test]
    fn test_click_brand_cell_opens_panel_and_outside_closes() {
        let mut state = state();
        // Grid starts at row 10; first cell inside the frame
        handle_mouse_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 2, 12))
            .unwrap();
        let panel = state.showroom.browser().panel().unwrap();
        assert_eq!(panel.brand_id, "honda");

        handle_mouse_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 2, 12))
            .unwrap();
        assert!(!state.showroom.browser().is_open());
    }

    #[test]
    fn test_click_theme_button_toggles() {
        let mut state = state();
        let before = state.showroom.theme().preference();
        handle_mouse_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 97, 1))
            .unwrap();
        assert_ne!(state.showroom.theme().preference(), before);
    }

    #[test]
    fn test_click_closes_zoom() {
        let mut state = state();
        state.dispatch(ShowroomEvent::OpenBrand("honda".to_string()));
        state.dispatch(ShowroomEvent::SelectDisplacement(125));
        state.dispatch(ShowroomEvent::OpenZoom { card: 0 });
        assert!(state.showroom.zoom().is_visible());

        handle_mouse_event(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 1, 1))
            .unwrap();
        assert!(!state.showroom.zoom().is_visible());
    }
}
