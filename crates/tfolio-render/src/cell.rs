//! A single terminal cell.

use tfolio_style::Style;

/// One cell of the buffer: a grapheme cluster plus its style.
///
/// Wide graphemes occupy their leading cell; the cell to their right is a
/// continuation holding an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    content: String,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            content: " ".to_string(),
            style: Style::default(),
        }
    }
}

impl Cell {
    /// A blank cell carrying the given style.
    #[must_use]
    pub fn blank(style: Style) -> Self {
        Self {
            content: " ".to_string(),
            style,
        }
    }

    /// A cell holding a single grapheme cluster.
    #[must_use]
    pub fn new(grapheme: &str, style: Style) -> Self {
        Self {
            content: grapheme.to_string(),
            style,
        }
    }

    /// Continuation cell behind a wide grapheme.
    #[must_use]
    pub(crate) fn continuation(style: Style) -> Self {
        Self {
            content: String::new(),
            style,
        }
    }

    /// The grapheme cluster, or `""` for a continuation cell.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether this cell is a wide-grapheme continuation.
    #[must_use]
    pub fn is_continuation(&self) -> bool {
        self.content.is_empty()
    }
}
