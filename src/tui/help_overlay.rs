//! Help overlay listing every keyboard shortcut and mouse gesture.
//!
//! Content is generated from the help registry, one section per context.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::help_registry::{HelpRegistry, OVERLAY_ORDER};
use super::Theme;

/// Scrollable help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    total_lines: usize,
    registry: HelpRegistry,
    closed: bool,
}

impl HelpOverlay {
    /// Creates a new help overlay scrolled to the top.
    #[must_use]
    pub fn new() -> Self {
        let registry = HelpRegistry::default();
        let total_lines = Self::help_content(&registry, &Theme::default()).len();
        Self {
            scroll_offset: 0,
            total_lines,
            registry,
            closed: false,
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    fn help_content(registry: &HelpRegistry, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("  {}", registry.app_name()),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for name in OVERLAY_ORDER {
            let Some(context) = registry.get_context(name) else {
                continue;
            };
            lines.push(Line::from(Span::styled(
                format!("═══ {} ═══", context.name.to_uppercase()),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", context.description),
                Style::default().fg(theme.text_muted),
            )));
            for binding in registry.get_bindings(name) {
                let (keys, action) = HelpRegistry::format_binding_for_help(binding);
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{keys:<24}"), Style::default().fg(theme.success)),
                    Span::styled(action, Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "  ? o Esc para cerrar • ↑↓ para desplazar",
            Style::default().fg(theme.text_muted),
        )));
        lines
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpOverlay {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(ComponentEvent::QuitRequested)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                None
            }
            KeyCode::Esc | KeyCode::Char('?' | 'q') => {
                self.closed = true;
                Some(ComponentEvent::Closed)
            }
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let modal_area = super::centered_rect(60, 80, area);
        frame.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content = Self::help_content(&self.registry, theme);
        let visible_height = chunks[0].height.saturating_sub(2) as usize;
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Ayuda - Atajos ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));
        frame.render_widget(paragraph, chunks[0]);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state = ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
            .position(self.scroll_offset);
        frame.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_bounds() {
        let mut help = HelpOverlay::new();
        help.scroll_up();
        assert_eq!(help.scroll_offset, 0);
        for _ in 0..1000 {
            help.scroll_down();
        }
        assert_eq!(help.scroll_offset, help.total_lines - 1);
    }

    #[test]
    fn test_escape_closes() {
        let mut help = HelpOverlay::new();
        let event = help.handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(event, Some(ComponentEvent::Closed));
        assert!(help.should_close());
    }

    #[test]
    fn test_ctrl_q_requests_quit() {
        let mut help = HelpOverlay::new();
        let event = help.handle_input(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert_eq!(event, Some(ComponentEvent::QuitRequested));
        assert!(!help.should_close());
    }
}
