//! Full-screen image zoom.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::AppState;

/// Zoom overlay widget
pub struct ZoomView;

impl ZoomView {
    /// Render the zoomed image path, alt text and caption
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let zoom = state.showroom.zoom();
        f.render_widget(Clear, area);

        let image = zoom.image().unwrap_or_default();
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("🖼  {image}"),
                Style::default().fg(theme.text),
            )),
            Line::from(""),
        ];
        if !zoom.caption().is_empty() {
            lines.push(Line::from(Span::styled(
                zoom.caption().to_string(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Esc, Enter o clic para cerrar",
            Style::default().fg(theme.text_muted),
        )));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {} ", zoom.alt()))
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.surface)),
            );
        f.render_widget(paragraph, area);
    }
}
