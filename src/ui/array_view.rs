//! Row of boxed elements, one per array slot.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph, Widget},
};

use crate::surface::Cell;

use super::theme::{tint_color, COLOR_DIM, COLOR_ELEMENT};

/// Height of one element box including its borders.
const BOX_HEIGHT: u16 = 3;
const GAP: u16 = 1;
/// Narrowest box that still shows one digit between borders.
const MIN_BOX_WIDTH: u16 = 3;

/// Draws the surface cells as bordered boxes with the index under each.
///
/// Boxes shrink to fit the area; when even the narrowest boxes do not fit,
/// trailing elements are cut off and a `…` marks the overflow.
pub struct ArrayView<'a> {
    cells: &'a [Cell],
}

impl<'a> ArrayView<'a> {
    pub fn new(cells: &'a [Cell]) -> Self {
        Self { cells }
    }

    /// Width of one box for `available` columns.
    ///
    /// Counts stay in `usize` so arrays longer than the screen is wide, or
    /// longer than `u16::MAX`, size down to the minimum box instead of
    /// overflowing.
    fn box_width(&self, available: u16) -> u16 {
        let widest = self
            .cells
            .iter()
            .map(|cell| cell.value.to_string().len())
            .max()
            .unwrap_or(1);
        let preferred = widest + 4;
        let count = self.cells.len().max(1);
        let gaps = usize::from(GAP) * (count - 1);
        let fitted = usize::from(available).saturating_sub(gaps) / count;
        let width = preferred.min(fitted).max(usize::from(MIN_BOX_WIDTH));
        u16::try_from(width).unwrap_or(available)
    }
}

impl Widget for ArrayView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.cells.is_empty() || area.height < BOX_HEIGHT || area.width < MIN_BOX_WIDTH {
            return;
        }

        let width = self.box_width(area.width);
        let count = self.cells.len();
        let row_width = count
            .saturating_mul(usize::from(width + GAP))
            .saturating_sub(usize::from(GAP));
        // Center the row when it is narrower than the area
        let offset = usize::from(area.width).saturating_sub(row_width) / 2;
        let mut x = area.x.saturating_add(offset as u16);
        let label_y = area.y + BOX_HEIGHT;

        for (index, cell) in self.cells.iter().enumerate() {
            if x.saturating_add(width) > area.right() {
                let marker_x = area.right().saturating_sub(1);
                buf.set_string(marker_x, area.y + 1, "…", Style::default().fg(COLOR_DIM));
                break;
            }

            let color = cell.tint.map_or(COLOR_ELEMENT, tint_color);
            let mut style = Style::default().fg(color);
            if cell.tint.is_some() {
                style = style.add_modifier(Modifier::BOLD);
            }

            let rect = Rect::new(x, area.y, width, BOX_HEIGHT);
            Paragraph::new(cell.value.to_string())
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::bordered().border_style(style))
                .render(rect, buf);

            if label_y < area.bottom() {
                let label = index.to_string();
                let label_x = x + width.saturating_sub(label.len() as u16) / 2;
                buf.set_string(label_x, label_y, label, Style::default().fg(COLOR_DIM));
            }

            x = x.saturating_add(width + GAP);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Tint;
    use crate::surface::ArraySurface;
    use crate::ui::theme::COLOR_SWAP_SOURCE;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map_or(" ", |cell| cell.symbol()))
            .collect()
    }

    #[test]
    fn test_renders_values_and_indices() {
        let cells = [Cell::new(23), Cell::new(7), Cell::new(15)];
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        ArrayView::new(&cells).render(area, &mut buf);

        let values = row(&buf, 1);
        assert!(values.contains("23"));
        assert!(values.contains('7'));
        assert!(values.contains("15"));
        let labels = row(&buf, 3);
        assert!(labels.contains('0') && labels.contains('2'));
    }

    #[test]
    fn test_tinted_cell_uses_tint_color() {
        let mut tinted = Cell::new(5);
        tinted.tint = Some(Tint::SwapSource);
        let cells = [tinted];
        let area = Rect::new(0, 0, 5, 4);
        let mut buf = Buffer::empty(area);
        ArrayView::new(&cells).render(area, &mut buf);

        let corner = buf.cell((0, 0)).unwrap();
        assert_eq!(corner.fg, COLOR_SWAP_SOURCE);
    }

    #[test]
    fn test_overflow_is_marked() {
        let cells: Vec<Cell> = (0..20).map(Cell::new).collect();
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        ArrayView::new(&cells).render(area, &mut buf);
        assert!(row(&buf, 1).contains('…'));
    }

    #[test]
    fn test_array_longer_than_u16_range_is_clipped() {
        let values: Vec<i64> = (0..70_000).collect();
        let surface = ArraySurface::new(&values);
        let area = Rect::new(0, 0, 120, 4);
        let mut buf = Buffer::empty(area);
        ArrayView::new(surface.cells()).render(area, &mut buf);

        let boxes = row(&buf, 1);
        assert!(boxes.starts_with("│0│"), "unexpected row {boxes:?}");
        assert!(boxes.contains('…'));
    }

    #[test]
    fn test_too_small_area_draws_nothing() {
        let cells = [Cell::new(1)];
        let area = Rect::new(0, 0, 10, 2);
        let mut buf = Buffer::empty(area);
        ArrayView::new(&cells).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
