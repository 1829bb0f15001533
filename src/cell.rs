// SPDX-License-Identifier: MIT
//
// Cell — the atomic unit of terminal rendering.
//
// Every character position on screen is a Cell: a codepoint, a style, and
// a precomputed display width. Width is part of the cell's identity —
// two cells with the same codepoint and style but different widths are
// not equal — so that diffing against a buffer whose width oracle has
// been upgraded re-renders the affected positions rather than silently
// trusting stale column math.
//
// Wide clusters (CJK, most emoji) are represented on a single cell whose
// width is 2; there is no continuation cell occupying the trailing column.
// Callers that need to know a cluster spans two columns read `width`.

use crate::style::Style;

/// Default character for empty cells.
const SPACE: char = ' ';

/// A single terminal cell: codepoint, style, and display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Primary Unicode codepoint to display.
    pub ch: char,
    /// Foreground, background, and attributes.
    pub style: Style,
    /// Display width in columns: 0, 1, or 2.
    pub width: u8,
}

impl Cell {
    /// An empty cell: space, empty style, width 1.
    pub const EMPTY: Self = Self {
        ch: SPACE,
        style: Style::EMPTY,
        width: 1,
    };

    /// Construct a cell from its three components.
    #[inline]
    #[must_use]
    pub const fn new(ch: char, style: Style, width: u8) -> Self {
        Self { ch, style, width }
    }

    /// Whether this cell is visually empty: a space with an empty style.
    ///
    /// Width is not part of the emptiness check — a space is a space
    /// regardless of what the width oracle reports for it.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.ch == SPACE && self.style.is_empty()
    }

    /// Set the style, keeping codepoint and width.
    #[inline]
    #[must_use]
    pub const fn with_style(self, style: Style) -> Self {
        Self { style, ..self }
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_cell_is_empty() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert_eq!(cell.ch, ' ');
        assert!(cell.style.is_empty());
    }

    #[test]
    fn empty_constant_matches_default() {
        assert_eq!(Cell::EMPTY, Cell::default());
    }

    #[test]
    fn new_cell_has_given_fields() {
        let style = Style::EMPTY.with_fg(Color::rgb(1, 2, 3));
        let cell = Cell::new('Z', style, 2);
        assert_eq!(cell.ch, 'Z');
        assert_eq!(cell.style, style);
        assert_eq!(cell.width, 2);
    }

    #[test]
    fn space_with_nonempty_style_is_not_empty() {
        let cell = Cell::new(' ', Style::EMPTY.bold(), 1);
        assert!(!cell.is_empty());
    }

    #[test]
    fn non_space_char_is_not_empty() {
        let cell = Cell::new('x', Style::EMPTY, 1);
        assert!(!cell.is_empty());
    }

    #[test]
    fn with_style_preserves_char_and_width() {
        let cell = Cell::new('Q', Style::EMPTY, 2).with_style(Style::EMPTY.bold());
        assert_eq!(cell.ch, 'Q');
        assert_eq!(cell.width, 2);
        assert!(cell.style.attrs.contains(crate::style::Attr::BOLD));
    }

    #[test]
    fn width_is_part_of_identity() {
        let narrow = Cell::new('a', Style::EMPTY, 1);
        let wide = Cell::new('a', Style::EMPTY, 2);
        assert_ne!(narrow, wide);
    }

    #[test]
    fn same_char_and_style_different_width_not_equal() {
        let a = Cell::new('X', Style::EMPTY.bold(), 1);
        let b = Cell::new('X', Style::EMPTY.bold(), 0);
        assert_ne!(a, b);
    }

    #[test]
    fn identical_cells_are_equal() {
        let a = Cell::new('Q', Style::EMPTY.with_fg(Color::rgb(1, 2, 3)), 1);
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn zero_width_cell_constructs() {
        let cell = Cell::new('\u{0300}', Style::EMPTY, 0);
        assert_eq!(cell.width, 0);
    }
}
