//! Side panel for an open brand: displacement filters and model cards.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{AppState, Theme};
use crate::services::browser::{NO_MODELS_MESSAGE, SELECT_PROMPT};
use crate::services::{BrandPanel, PanelContent};

/// Rows per model card including borders.
pub const CARD_HEIGHT: u16 = 6;

const FILTER_PREFIX: &str = "Cilindrada: ";
const COLORS_PREFIX: &str = "Colores: ";
const LEAD_BUTTON: &str = "[ Consultar ]";

/// What a click inside the panel landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelHit {
    /// A displacement filter button
    Filter(u32),
    /// A color swatch on a card
    Swatch {
        /// Card index
        card: usize,
        /// Color label
        label: String,
    },
    /// The lead button on a card
    Lead(usize),
    /// Anywhere else on a card (opens the zoom)
    Card(usize),
    /// Panel background
    Background,
}

fn filter_label(cc: u32) -> String {
    format!(" {cc}cc ")
}

fn swatch_label(color: &str) -> String {
    format!(" {color} ")
}

fn text_width(text: &str) -> u16 {
    text.chars().count() as u16
}

/// Finds which of `labels`, laid out from `start` with one space between
/// them, contains `column`.
fn label_at(start: u16, labels: &[String], column: u16) -> Option<usize> {
    let mut x = start;
    for (index, label) in labels.iter().enumerate() {
        let width = text_width(label);
        if column >= x && column < x + width {
            return Some(index);
        }
        x += width + 1;
    }
    None
}

/// Card placement inside the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PanelGeometry {
    inner: Rect,
    first_card: usize,
    visible_cards: usize,
}

impl PanelGeometry {
    fn new(area: Rect, cursor: usize) -> Self {
        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        let visible_cards = (inner.height.saturating_sub(2) / CARD_HEIGHT).max(1) as usize;
        let first_card = (cursor + 1).saturating_sub(visible_cards);
        Self {
            inner,
            first_card,
            visible_cards,
        }
    }

    fn filter_row(&self) -> u16 {
        self.inner.y
    }

    fn body(&self) -> Rect {
        Rect {
            x: self.inner.x,
            y: self.inner.y + 2,
            width: self.inner.width,
            height: self.inner.height.saturating_sub(2),
        }
    }

    fn card(&self, index: usize) -> Option<Rect> {
        let slot = index.checked_sub(self.first_card)?;
        if slot >= self.visible_cards {
            return None;
        }
        let body = self.body();
        let y = body.y + slot as u16 * CARD_HEIGHT;
        if y + CARD_HEIGHT > body.bottom() {
            return None;
        }
        Some(Rect::new(body.x, y, body.width, CARD_HEIGHT))
    }
}

/// Brand panel widget
pub struct BrandPanelView;

impl BrandPanelView {
    /// Resolves a click at (`column`, `row`) inside `area`.
    #[must_use]
    pub fn hit_test(area: Rect, state: &AppState, column: u16, row: u16) -> Option<PanelHit> {
        let panel = state.showroom.browser().panel()?;
        let geometry = PanelGeometry::new(area, state.card_cursor);
        let inside = column >= area.x
            && column < area.right()
            && row >= area.y
            && row < area.bottom();
        if !inside {
            return None;
        }

        if row == geometry.filter_row() {
            let labels: Vec<String> = panel.filters.iter().map(|cc| filter_label(*cc)).collect();
            let start = geometry.inner.x + text_width(FILTER_PREFIX);
            return Some(
                label_at(start, &labels, column)
                    .and_then(|i| panel.filters.get(i).copied())
                    .map_or(PanelHit::Background, PanelHit::Filter),
            );
        }

        let catalog = state.showroom.catalog();
        for (index, card) in panel.content.cards().iter().enumerate() {
            let Some(rect) = geometry.card(index) else {
                continue;
            };
            if row < rect.y || row >= rect.bottom() {
                continue;
            }
            let content_x = rect.x + 1;
            let colors_row = rect.y + 2;
            let button_row = rect.y + 4;
            if row == colors_row {
                let colors = catalog
                    .model(&card.key)
                    .map(|m| m.colors.clone())
                    .unwrap_or_default();
                let labels: Vec<String> = colors.iter().map(|c| swatch_label(c)).collect();
                if let Some(i) = label_at(content_x + text_width(COLORS_PREFIX), &labels, column) {
                    return Some(PanelHit::Swatch {
                        card: index,
                        label: colors[i].clone(),
                    });
                }
            }
            if row == button_row
                && column >= content_x
                && column < content_x + text_width(LEAD_BUTTON)
            {
                return Some(PanelHit::Lead(index));
            }
            return Some(PanelHit::Card(index));
        }
        Some(PanelHit::Background)
    }

    /// Render the open panel
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let Some(panel) = state.showroom.browser().panel() else {
            return;
        };
        let theme = &state.theme;
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" {} ", panel.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        f.render_widget(block, area);

        let geometry = PanelGeometry::new(area, state.card_cursor);
        Self::render_filters(
            f,
            Rect::new(geometry.inner.x, geometry.filter_row(), geometry.inner.width, 1),
            panel,
            theme,
        );

        let body = geometry.body();
        match &panel.content {
            PanelContent::Prompt => Self::render_message(f, body, SELECT_PROMPT, theme),
            PanelContent::Empty => Self::render_message(f, body, NO_MODELS_MESSAGE, theme),
            PanelContent::Models(cards) => {
                for (index, card) in cards.iter().enumerate() {
                    let Some(rect) = geometry.card(index) else {
                        continue;
                    };
                    Self::render_card(f, rect, state, index, card);
                }
            }
        }
    }

    fn render_filters(f: &mut Frame, area: Rect, panel: &BrandPanel, theme: &Theme) {
        let mut spans = vec![Span::styled(
            FILTER_PREFIX,
            Style::default().fg(theme.text_secondary),
        )];
        for cc in &panel.filters {
            let style = if panel.active_filter == Some(*cc) {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.primary).bg(theme.surface)
            };
            spans.push(Span::styled(filter_label(*cc), style));
            spans.push(Span::raw(" "));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_message(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
        f.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(theme.text_muted))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }

    fn render_card(
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        index: usize,
        card: &crate::services::ModelCard,
    ) {
        let theme = &state.theme;
        let Some(model) = state.showroom.catalog().model(&card.key) else {
            return;
        };
        let selected_color = state.showroom.browser().selected_color(&card.key);
        let focused = index == state.card_cursor;

        let mut swatches = vec![Span::styled(
            COLORS_PREFIX,
            Style::default().fg(theme.text_secondary),
        )];
        for color in &model.colors {
            let style = if selected_color == Some(color.as_str()) {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text).bg(theme.surface)
            };
            swatches.push(Span::styled(swatch_label(color), style));
            swatches.push(Span::raw(" "));
        }

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    model.name.clone(),
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", model.displacement_label()),
                    Style::default().fg(theme.text_secondary),
                ),
            ]),
            Line::from(swatches),
            Line::from(Span::styled(
                format!("Imagen: {}", card.image),
                Style::default().fg(theme.text_muted),
            )),
            Line::from(Span::styled(
                LEAD_BUTTON,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        let border_style = if focused {
            Style::default().fg(theme.active)
        } else {
            Style::default().fg(theme.inactive)
        };
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .style(Style::default().bg(theme.background)),
            ),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_at_walks_spaced_labels() {
        let labels = vec![filter_label(110), filter_label(125)];
        // " 110cc " spans 10..17, a space, then " 125cc " spans 18..25
        assert_eq!(label_at(10, &labels, 9), None);
        assert_eq!(label_at(10, &labels, 10), Some(0));
        assert_eq!(label_at(10, &labels, 16), Some(0));
        assert_eq!(label_at(10, &labels, 17), None);
        assert_eq!(label_at(10, &labels, 18), Some(1));
        assert_eq!(label_at(10, &labels, 25), None);
    }

    #[test]
    fn test_cards_scroll_with_cursor() {
        // Body height 18 - 2 - 2 = 14 fits two cards
        let geometry = PanelGeometry::new(Rect::new(0, 0, 40, 18), 3);
        assert_eq!(geometry.visible_cards, 2);
        assert_eq!(geometry.card(1), None);
        assert_eq!(geometry.card(2), Some(Rect::new(1, 3, 38, CARD_HEIGHT)));
        assert_eq!(geometry.card(3), Some(Rect::new(1, 9, 38, CARD_HEIGHT)));
        assert_eq!(geometry.card(4), None);
    }
}
