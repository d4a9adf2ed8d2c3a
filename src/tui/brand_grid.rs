//! Brand grid: one cell per catalog brand, showing name and logo.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;

/// Cells per row.
pub const GRID_COLUMNS: usize = 4;

/// Rows per cell including borders.
pub const CELL_HEIGHT: u16 = 4;

/// Geometry of the grid inside its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    inner: Rect,
    cell_width: u16,
    first_row: usize,
}

impl GridGeometry {
    /// Computes cell sizes and scrolling so the cursor row stays visible.
    #[must_use]
    pub fn new(area: Rect, cursor: usize) -> Self {
        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        let cell_width = inner.width / GRID_COLUMNS as u16;
        let visible_rows = (inner.height / CELL_HEIGHT).max(1) as usize;
        let cursor_row = cursor / GRID_COLUMNS;
        let first_row = (cursor_row + 1).saturating_sub(visible_rows);
        Self {
            inner,
            cell_width,
            first_row,
        }
    }

    /// Screen rectangle of brand `index`, if it is on screen.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Rect> {
        let row = (index / GRID_COLUMNS).checked_sub(self.first_row)?;
        let col = index % GRID_COLUMNS;
        let y = self.inner.y + row as u16 * CELL_HEIGHT;
        if y + CELL_HEIGHT > self.inner.bottom() || self.cell_width == 0 {
            return None;
        }
        Some(Rect::new(
            self.inner.x + col as u16 * self.cell_width,
            y,
            self.cell_width,
            CELL_HEIGHT,
        ))
    }

    /// Brand index under a screen cell.
    #[must_use]
    pub fn index_at(&self, column: u16, row: u16, brand_count: usize) -> Option<usize> {
        if self.cell_width == 0
            || column < self.inner.x
            || row < self.inner.y
            || column >= self.inner.x + self.cell_width * GRID_COLUMNS as u16
            || row >= self.inner.bottom()
        {
            return None;
        }
        let col = ((column - self.inner.x) / self.cell_width) as usize;
        let grid_row = ((row - self.inner.y) / CELL_HEIGHT) as usize + self.first_row;
        let index = grid_row * GRID_COLUMNS + col;
        (index < brand_count && self.cell(index).is_some()).then_some(index)
    }
}

/// Brand grid widget
pub struct BrandGrid;

impl BrandGrid {
    /// Brand index at a screen position.
    #[must_use]
    pub fn cell_at(area: Rect, state: &AppState, column: u16, row: u16) -> Option<usize> {
        GridGeometry::new(area, state.brand_cursor).index_at(
            column,
            row,
            state.showroom.catalog().len(),
        )
    }

    /// Render all brands
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let block = Block::default()
            .title(" Marcas ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        f.render_widget(block, area);

        let catalog = state.showroom.catalog();
        if catalog.is_empty() {
            let inner = Rect {
                x: area.x + 1,
                y: area.y + 1,
                width: area.width.saturating_sub(2),
                height: area.height.saturating_sub(2),
            };
            f.render_widget(
                Paragraph::new("No hay marcas en el catálogo")
                    .style(Style::default().fg(theme.text_muted)),
                inner,
            );
            return;
        }

        let geometry = GridGeometry::new(area, state.brand_cursor);
        for (index, (brand_id, brand)) in catalog.iter().enumerate() {
            let Some(cell) = geometry.cell(index) else {
                continue;
            };
            let selected = index == state.brand_cursor;
            let border_style = if selected {
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.inactive)
            };
            let logo = state.showroom.theme().logo(brand_id).unwrap_or_default();
            let lines = vec![
                Line::from(Span::styled(
                    brand.name.clone(),
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    logo.to_string(),
                    Style::default().fg(theme.text_muted),
                )),
            ];
            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style)
                        .style(Style::default().bg(if selected {
                            theme.highlight_bg
                        } else {
                            theme.background
                        })),
                );
            f.render_widget(paragraph, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_at_maps_cells() {
        // Inner area: x 1..81, y 11.., cells 20 wide and 4 tall
        let geometry = GridGeometry::new(Rect::new(0, 10, 82, 20), 0);
        assert_eq!(geometry.index_at(1, 11, 8), Some(0));
        assert_eq!(geometry.index_at(21, 11, 8), Some(1));
        assert_eq!(geometry.index_at(61, 14, 8), Some(3));
        assert_eq!(geometry.index_at(1, 15, 8), Some(4));
        assert_eq!(geometry.index_at(1, 19, 8), None);
        assert_eq!(geometry.index_at(0, 11, 8), None);
    }

    #[test]
    fn test_scrolls_to_keep_cursor_visible() {
        // Room for two rows; cursor on the fourth row
        let geometry = GridGeometry::new(Rect::new(0, 0, 42, 10), 13);
        assert_eq!(geometry.cell(0), None);
        assert!(geometry.cell(13).is_some());
        assert_eq!(geometry.index_at(1, 1, 16), Some(8));
    }
}
