//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod brand_grid;
pub mod brand_panel;
pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod help_registry;
pub mod hero;
pub mod lead_modal;
pub mod search_bar;
pub mod status_bar;
pub mod theme;
pub mod zoom_overlay;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::app::events::ShowroomEvent;
use crate::app::link::LinkOpener;
use crate::app::showroom::Showroom;
use crate::branding::APP_DISPLAY_NAME;
use crate::services::AssetCache;
use crate::shortcuts::ShortcutRegistry;

// Re-export TUI components
pub use brand_grid::BrandGrid;
pub use brand_panel::BrandPanelView;
pub use component::{Component, ComponentEvent};
pub use help_overlay::HelpOverlay;
pub use hero::HeroBanner;
pub use lead_modal::{LeadField, LeadModal};
pub use search_bar::SearchPopup;
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use zoom_overlay::ZoomView;

use help_registry::contexts;

/// Popup types that can be displayed over the showroom
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupType {
    /// Help overlay popup
    HelpOverlay,
}

/// Active component - holds the currently active popup component
#[derive(Debug)]
pub enum ActiveComponent {
    /// Help overlay component
    HelpOverlay(HelpOverlay),
}

/// Mouse tracking between events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    /// Pointer is currently over the hero banner
    pub hero_hovered: bool,
    /// Cell where a left-button drag started on the hero
    pub drag_origin: Option<(u16, u16)>,
}

/// Fixed regions of the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar
    pub title: Rect,
    /// Hero banner
    pub hero: Rect,
    /// Brand grid
    pub grid: Rect,
    /// Status bar
    pub status: Rect,
}

impl ScreenLayout {
    /// Splits the terminal area.
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Length(7), // Hero
                Constraint::Min(4),    // Brand grid
                Constraint::Length(4), // Status bar
            ])
            .split(area);
        Self {
            title: chunks[0],
            hero: chunks[1],
            grid: chunks[2],
            status: chunks[3],
        }
    }

    /// Side panel: the right 60% between title and status bars.
    #[must_use]
    pub fn panel(&self) -> Rect {
        let body = Rect {
            x: self.hero.x,
            y: self.hero.y,
            width: self.hero.width,
            height: self.hero.height + self.grid.height,
        };
        RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(body)[1]
    }
}

/// Application state - single source of truth
///
/// The showroom core owns the domain state; this struct adds what only the
/// terminal needs (cursors, focus, status line, mouse tracking).
pub struct AppState {
    /// Domain state and behavior
    pub showroom: Showroom,
    /// Current UI theme
    pub theme: Theme,
    /// Keyboard shortcuts
    pub shortcuts: ShortcutRegistry,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Currently active component (if any)
    pub active_component: Option<ActiveComponent>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,
    /// Set when the user quits
    pub should_quit: bool,
    /// Selected brand in the grid
    pub brand_cursor: usize,
    /// Selected card in the open panel
    pub card_cursor: usize,
    /// Selected search result
    pub result_cursor: usize,
    /// Focused lead form field
    pub lead_field: LeadField,
    /// Mouse tracking
    pub pointer: PointerState,
    /// Last known terminal area
    pub viewport: Rect,
    /// Background asset cache worker
    pub asset_cache: AssetCache,
    /// Deep link handler
    pub opener: Box<dyn LinkOpener>,
}

impl AppState {
    /// Creates the UI state around a showroom.
    pub fn new(showroom: Showroom, asset_cache: AssetCache, opener: Box<dyn LinkOpener>) -> Self {
        let theme = Theme::from_preference(showroom.theme().preference());
        let status_message = if showroom.store().is_fallback() {
            "Catálogo no disponible: mostrando datos de respaldo".to_string()
        } else {
            String::new()
        };
        Self {
            showroom,
            theme,
            shortcuts: ShortcutRegistry::new(),
            active_popup: None,
            active_component: None,
            status_message,
            error_message: None,
            should_quit: false,
            brand_cursor: 0,
            card_cursor: 0,
            result_cursor: 0,
            lead_field: LeadField::Name,
            pointer: PointerState::default(),
            viewport: Rect::new(0, 0, 80, 24),
            asset_cache,
            opener,
        }
    }

    /// Sends an event to the showroom and performs its effect.
    pub fn dispatch(&mut self, event: ShowroomEvent) {
        self.dispatch_at(event, Instant::now());
    }

    /// Sends an event with an explicit timestamp.
    pub fn dispatch_at(&mut self, event: ShowroomEvent, now: Instant) {
        if let Some(effect) = self.showroom.handle(event, now) {
            handlers::apply_effect(self, effect);
        }
        self.theme = Theme::from_preference(self.showroom.theme().preference());
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Brand ids in grid order.
    #[must_use]
    pub fn brand_ids(&self) -> Vec<String> {
        self.showroom
            .catalog()
            .brand_ids()
            .map(str::to_string)
            .collect()
    }

    /// Brand id under the grid cursor.
    #[must_use]
    pub fn selected_brand_id(&self) -> Option<String> {
        self.showroom
            .catalog()
            .brand_ids()
            .nth(self.brand_cursor)
            .map(str::to_string)
    }

    /// Context name used for shortcuts and hints.
    #[must_use]
    pub fn context(&self) -> &'static str {
        if self.active_popup == Some(PopupType::HelpOverlay) {
            contexts::HELP
        } else if self.showroom.zoom().is_visible() {
            contexts::ZOOM
        } else if self.showroom.lead().is_open() {
            contexts::LEAD
        } else if self.showroom.search().open {
            contexts::SEARCH
        } else if self.showroom.browser().is_open() {
            contexts::PANEL
        } else {
            contexts::MAIN
        }
    }

    /// Open the help overlay component
    pub fn open_help_overlay(&mut self) {
        self.active_component = Some(ActiveComponent::HelpOverlay(HelpOverlay::new()));
        self.active_popup = Some(PopupType::HelpOverlay);
    }

    /// Close the currently active component
    pub fn close_component(&mut self) {
        self.active_component = None;
        self.active_popup = None;
    }

    /// Advances timers and background work. Returns true if a redraw is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.showroom.tick(now);
        if self.asset_cache.poll() {
            changed = true;
        }
        let cards = self
            .showroom
            .browser()
            .panel()
            .map_or(0, |p| p.content.cards().len());
        if self.card_cursor >= cards {
            self.card_cursor = cards.saturating_sub(1);
        }
        changed
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.tick(Instant::now());

        let size = terminal.size().context("Failed to read terminal size")?;
        state.viewport = Rect::new(0, 0, size.width, size.height);

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handlers::handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => handlers::handle_mouse_event(state, mouse)?,
                // Terminal resized, will re-render on next loop
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let layout = ScreenLayout::compute(f.area());

    render_title_bar(f, layout.title, state);
    HeroBanner::render(f, layout.hero, state);
    BrandGrid::render(f, layout.grid, state);
    StatusBar::render(f, layout.status, state, &state.theme);

    if state.showroom.browser().is_open() {
        BrandPanelView::render(f, layout.panel(), state);
    }
    if state.showroom.search().open {
        SearchPopup::render(f, search_bar::popup_area(&layout, state), state);
    }
    if state.showroom.lead().is_open() {
        LeadModal::render(f, centered_rect(60, 70, f.area()), state);
    }
    if state.showroom.zoom().is_visible() {
        ZoomView::render(f, centered_rect(80, 80, f.area()), state);
    }

    if let Some(PopupType::HelpOverlay) = &state.active_popup {
        if let Some(ActiveComponent::HelpOverlay(ref help)) = state.active_component {
            help.render(f, f.area(), &state.theme);
        }
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Right-aligned title bar buttons, left to right: search, theme.
pub(crate) fn title_buttons(state: &AppState) -> [String; 2] {
    [
        " / Buscar ".to_string(),
        format!(" {} Tema ", state.showroom.theme().icon()),
    ]
}

/// Render title bar with catalog source and theme icon
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let source = if state.showroom.store().is_fallback() {
        " (datos de respaldo)".to_string()
    } else {
        String::new()
    };
    let [search, theme] = title_buttons(state);

    let left = Line::from(vec![
        Span::styled(
            format!(" {APP_DISPLAY_NAME}"),
            Style::default()
                .fg(state.theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(source, Style::default().fg(state.theme.warning)),
    ]);
    let right = Line::from(vec![
        Span::styled(search, Style::default().fg(state.theme.accent)),
        Span::styled(theme, Style::default().fg(state.theme.accent)),
    ])
    .right_aligned();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(state.theme.primary))
        .style(Style::default().bg(state.theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(left), inner);
    f.render_widget(Paragraph::new(right), inner);
}

/// Render error overlay
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(theme.error),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter o Esc para continuar",
            Style::default().fg(theme.text_muted),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(paragraph, area);
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
