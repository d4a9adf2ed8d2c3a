//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::help_registry::{self, HelpRegistry};
use super::{AppState, Theme};
use crate::services::CacheStatus;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        // First line: error, status message, or asset cache state
        let first_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ])
        } else if !state.status_message.is_empty() {
            Line::from(state.status_message.clone())
        } else {
            Self::cache_line(state.asset_cache.status(), theme)
        };

        let status_text = vec![first_line, Self::get_contextual_help_line(state, theme)];

        let status = Paragraph::new(status_text)
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Estado ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn cache_line(status: &CacheStatus, theme: &Theme) -> Line<'static> {
        let (text, color) = match status {
            CacheStatus::Unsupported => return Line::from(""),
            CacheStatus::Running => ("Preparando imágenes...".to_string(), theme.warning),
            CacheStatus::Ready { cached, missing: 0 } => {
                (format!("Imágenes listas: {cached}"), theme.success)
            }
            CacheStatus::Ready { cached, missing } => (
                format!("Imágenes listas: {cached} ({missing} faltantes)"),
                theme.warning,
            ),
            CacheStatus::Failed(_) => (
                "Caché de imágenes no disponible".to_string(),
                theme.text_muted,
            ),
        };
        Line::from(vec![
            Span::styled("Caché: ", Style::default().fg(theme.primary)),
            Span::styled(text, Style::default().fg(color)),
        ])
    }

    /// Get contextual help line from help registry
    fn get_contextual_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let context_name = state.context();
        let registry = HelpRegistry::default();

        let max_hints = if context_name == help_registry::contexts::MAIN {
            4
        } else {
            5
        };
        let help_hints = registry.format_status_bar_hints(context_name, max_hints);

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Ayuda: ", Style::default().fg(theme.primary)));

        if help_hints.is_empty() {
            spans.push(Span::raw("Presioná ? para ver los atajos"));
            return Line::from(spans);
        }

        for (i, (key, action)) in help_hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(key, Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(action));
        }

        // Always add "?: Ayuda" at the end for main context
        if context_name == help_registry::contexts::MAIN {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("?", Style::default().fg(theme.accent)));
            spans.push(Span::raw(": Ayuda"));
        }

        Line::from(spans)
    }
}
