//! Search popup anchored under the title bar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{AppState, ScreenLayout};
use crate::services::search::{MIN_QUERY_LEN, NO_RESULTS_MESSAGE};

/// Rows for the query input including borders.
const INPUT_HEIGHT: u16 = 3;

/// Rows per result entry (title and detail).
const RESULT_HEIGHT: u16 = 2;

/// Popup placement for the current state.
#[must_use]
pub fn popup_area(layout: &ScreenLayout, state: &AppState) -> Rect {
    let outcome = &state.showroom.search().outcome;
    let list_rows = if outcome.is_visible() {
        let results = outcome.results().len() as u16;
        // Borders plus one row for the empty-state message
        2 + (results * RESULT_HEIGHT).max(1)
    } else {
        0
    };

    let width = layout.title.width * 3 / 5;
    let x = layout.title.x + (layout.title.width - width) / 2;
    let y = layout.title.bottom();
    let max_height = layout.status.y.saturating_sub(y);
    Rect::new(x, y, width, (INPUT_HEIGHT + list_rows).min(max_height))
}

/// Search popup widget
pub struct SearchPopup;

impl SearchPopup {
    /// Result index at a screen position.
    #[must_use]
    pub fn result_at(area: Rect, state: &AppState, column: u16, row: u16) -> Option<usize> {
        let list_top = area.y + INPUT_HEIGHT + 1;
        if column <= area.x || column + 1 >= area.right() || row < list_top {
            return None;
        }
        let index = ((row - list_top) / RESULT_HEIGHT) as usize;
        (index < state.showroom.search_results().len() && row + 1 < area.bottom())
            .then_some(index)
    }

    /// Render the input and the result list
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let search = state.showroom.search();
        f.render_widget(Clear, area);

        let input_area = Rect::new(area.x, area.y, area.width, INPUT_HEIGHT.min(area.height));
        let input = Paragraph::new(Line::from(vec![
            Span::styled("🔍 ", Style::default().fg(theme.accent)),
            Span::styled(search.query.clone(), Style::default().fg(theme.text)),
            Span::styled("█", Style::default().fg(theme.accent)),
        ]))
        .block(
            Block::default()
                .title(" Buscar marca o modelo ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(input, input_area);

        if !search.outcome.is_visible() {
            if !search.query.trim().is_empty() && area.height > INPUT_HEIGHT {
                // Query too short: hint only, no list
                let hint = format!("Escribí al menos {MIN_QUERY_LEN} caracteres");
                f.render_widget(
                    Paragraph::new(hint).style(Style::default().fg(theme.text_muted)),
                    Rect::new(area.x + 1, area.y + INPUT_HEIGHT, area.width.saturating_sub(2), 1),
                );
            }
            return;
        }

        let list_area = Rect {
            x: area.x,
            y: area.y + INPUT_HEIGHT,
            width: area.width,
            height: area.height.saturating_sub(INPUT_HEIGHT),
        };
        let results = search.outcome.results();
        let lines: Vec<Line> = if results.is_empty() {
            vec![Line::from(Span::styled(
                NO_RESULTS_MESSAGE,
                Style::default().fg(theme.text_muted),
            ))]
        } else {
            results
                .iter()
                .enumerate()
                .flat_map(|(index, result)| {
                    let title_style = if index == state.result_cursor {
                        Style::default()
                            .fg(theme.active)
                            .bg(theme.highlight_bg)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                            .fg(theme.text)
                            .add_modifier(Modifier::BOLD)
                    };
                    [
                        Line::from(Span::styled(result.title(), title_style)),
                        Line::from(Span::styled(
                            format!("  {}", result.detail()),
                            Style::default().fg(theme.text_secondary),
                        )),
                    ]
                })
                .collect()
        };

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.inactive))
                    .style(Style::default().bg(theme.background)),
            ),
            list_area,
        );
    }
}
