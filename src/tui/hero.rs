//! Hero banner: rotating promotional slides with prev/next arrows.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;
use crate::services::RotatorState;

/// Columns at each edge of the banner that act as arrow buttons.
pub const ARROW_WIDTH: u16 = 4;

/// Arrow buttons on the banner edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroArrow {
    /// Left edge
    Previous,
    /// Right edge
    Next,
}

/// Hero banner widget
pub struct HeroBanner;

impl HeroBanner {
    /// Arrow under `column`, if any.
    #[must_use]
    pub fn arrow_at(area: Rect, column: u16) -> Option<HeroArrow> {
        if area.width < ARROW_WIDTH * 2 || column < area.x || column >= area.right() {
            return None;
        }
        if column < area.x + ARROW_WIDTH {
            Some(HeroArrow::Previous)
        } else if column >= area.right() - ARROW_WIDTH {
            Some(HeroArrow::Next)
        } else {
            None
        }
    }

    /// Render the active slide
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let rotator = state.showroom.rotator();

        let mut title = Line::from(" Promociones ");
        if rotator.state() == RotatorState::Paused {
            title = Line::from(vec![
                Span::raw(" Promociones "),
                Span::styled("⏸ ", Style::default().fg(theme.text_muted)),
            ]);
        }
        let border_color = if state.pointer.hero_hovered {
            theme.active
        } else {
            theme.primary
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(slide) = state.showroom.slides().get(rotator.current()) else {
            return;
        };

        let dots: Vec<Span> = (0..rotator.slide_count())
            .map(|index| {
                if rotator.is_active(index) {
                    Span::styled("● ", Style::default().fg(theme.primary))
                } else {
                    Span::styled("○ ", Style::default().fg(theme.text_muted))
                }
            })
            .collect();

        let lines = vec![
            Line::from(Span::styled(
                slide.title,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                slide.subtitle,
                Style::default().fg(theme.text_secondary),
            )),
            Line::from(""),
            Line::from(dots),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().bg(theme.surface)),
            inner,
        );

        if inner.width >= ARROW_WIDTH * 2 && inner.height > 0 {
            let middle = inner.y + inner.height / 2;
            let arrow_style = Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD);
            f.render_widget(
                Paragraph::new(Span::styled(" ◀", arrow_style)),
                Rect::new(inner.x, middle, ARROW_WIDTH, 1),
            );
            f.render_widget(
                Paragraph::new(Span::styled("▶ ", arrow_style)).alignment(Alignment::Right),
                Rect::new(inner.right() - ARROW_WIDTH, middle, ARROW_WIDTH, 1),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_zones() {
        let area = Rect::new(0, 3, 40, 7);
        assert_eq!(HeroBanner::arrow_at(area, 0), Some(HeroArrow::Previous));
        assert_eq!(HeroBanner::arrow_at(area, 3), Some(HeroArrow::Previous));
        assert_eq!(HeroBanner::arrow_at(area, 20), None);
        assert_eq!(HeroBanner::arrow_at(area, 36), Some(HeroArrow::Next));
        assert_eq!(HeroBanner::arrow_at(area, 39), Some(HeroArrow::Next));
        assert_eq!(HeroBanner::arrow_at(area, 40), None);
    }

    #[test]
    fn test_narrow_banner_has_no_arrows() {
        assert_eq!(HeroBanner::arrow_at(Rect::new(0, 0, 6, 7), 0), None);
    }
}
