//! Row-major cell grid.

use tfolio_core::Rect;
use tfolio_style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::cell::Cell;

/// A width × height grid of [`Cell`]s.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The rect covering the whole buffer.
    #[must_use]
    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Reset every cell to blank-with-default-style and adopt a new size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fill `area` (clipped to the buffer) with copies of `cell`.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let area = area.intersection(&self.area());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set(x, y, cell.clone());
            }
        }
    }

    /// Write `text` starting at `(x, y)`, clipped to the buffer edge.
    ///
    /// Grapheme-aware: wide clusters take two columns, with a continuation
    /// cell behind them. Returns the column after the last written cell.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        let mut col = x;
        if y >= self.height {
            return col;
        }
        for grapheme in text.graphemes(true) {
            let w = grapheme.width().max(1) as u16;
            if col >= self.width {
                break;
            }
            // A wide grapheme that would straddle the edge is dropped.
            if col + w > self.width {
                break;
            }
            self.set(col, y, Cell::new(grapheme, style));
            for cont in 1..w {
                self.set(col + cont, y, Cell::continuation(style));
            }
            col += w;
        }
        col
    }

    /// Collect the text content of a row; used by tests and the presenter.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                out.push_str(cell.content());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfolio_style::Color;

    #[test]
    fn set_string_writes_and_advances() {
        let mut buf = Buffer::new(10, 2);
        let end = buf.set_string(1, 0, "hey", Style::default());
        assert_eq!(end, 4);
        assert_eq!(buf.row_text(0), " hey      ");
    }

    #[test]
    fn set_string_clips_at_edge() {
        let mut buf = Buffer::new(4, 1);
        buf.set_string(2, 0, "long", Style::default());
        assert_eq!(buf.row_text(0), "  lo");
    }

    #[test]
    fn set_string_off_screen_row_is_noop() {
        let mut buf = Buffer::new(4, 1);
        buf.set_string(0, 5, "x", Style::default());
        assert_eq!(buf.row_text(0), "    ");
    }

    #[test]
    fn wide_grapheme_gets_continuation() {
        let mut buf = Buffer::new(6, 1);
        let end = buf.set_string(0, 0, "你a", Style::default());
        assert_eq!(end, 3);
        assert!(buf.get(1, 0).unwrap().is_continuation());
        assert_eq!(buf.get(2, 0).unwrap().content(), "a");
    }

    #[test]
    fn fill_is_clipped() {
        let mut buf = Buffer::new(3, 3);
        let style = Style::new().bg(Color::Blue);
        buf.fill(Rect::new(2, 2, 5, 5), Cell::blank(style));
        assert_eq!(buf.get(2, 2).unwrap().style, style);
        assert_eq!(buf.get(0, 0).unwrap().style, Style::default());
    }

    #[test]
    fn resize_clears_content() {
        let mut buf = Buffer::new(4, 1);
        buf.set_string(0, 0, "abcd", Style::default());
        buf.resize(6, 2);
        assert_eq!(buf.width(), 6);
        assert_eq!(buf.row_text(0), "      ");
    }
}
