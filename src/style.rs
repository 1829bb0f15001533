// SPDX-License-Identifier: MIT
//
// Style — foreground, background, and boolean attributes for a cell.
//
// A style carries no implicit defaults beyond "absent means terminal
// default": an absent foreground or background is not black or white, it
// is simply not emitted, leaving whatever the terminal already shows.
//
// Attribute order here matches the SGR parameter order pinned in `ansi`
// (bold, dim, italic, underline, blink, reverse, hidden, strike) — that
// order is part of the wire contract, not an implementation detail.

use crate::color::Color;

bitflags::bitflags! {
    /// Boolean text attributes, stored as a compact bitfield.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1.
        const BOLD      = 1 << 0;
        /// SGR 2.
        const DIM       = 1 << 1;
        /// SGR 3.
        const ITALIC    = 1 << 2;
        /// SGR 4.
        const UNDERLINE = 1 << 3;
        /// SGR 5.
        const BLINK     = 1 << 4;
        /// SGR 7.
        const REVERSE   = 1 << 5;
        /// SGR 8.
        const HIDDEN    = 1 << 6;
        /// SGR 9.
        const STRIKE    = 1 << 7;
    }
}

/// Foreground, background, and attribute state for a cell.
///
/// Immutable; `with_*` builders return a new value. A style is empty iff
/// both colors are absent and no attribute is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    /// Foreground color, or absent for terminal default.
    pub fg: Option<Color>,
    /// Background color, or absent for terminal default.
    pub bg: Option<Color>,
    /// Active boolean attributes.
    pub attrs: Attr,
}

impl Style {
    /// The empty style: no colors, no attributes.
    pub const EMPTY: Self = Self {
        fg: None,
        bg: None,
        attrs: Attr::empty(),
    };

    /// Whether this style carries no colors and no attributes.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// Set the foreground color.
    #[inline]
    #[must_use]
    pub const fn with_fg(self, fg: Color) -> Self {
        Self {
            fg: Some(fg),
            ..self
        }
    }

    /// Set the background color.
    #[inline]
    #[must_use]
    pub const fn with_bg(self, bg: Color) -> Self {
        Self {
            bg: Some(bg),
            ..self
        }
    }

    /// Add one or more attributes.
    #[inline]
    #[must_use]
    pub const fn with_attrs(self, attrs: Attr) -> Self {
        Self {
            attrs: self.attrs.union(attrs),
            ..self
        }
    }

    /// Shorthand for `with_attrs(Attr::BOLD)`.
    #[inline]
    #[must_use]
    pub const fn bold(self) -> Self {
        self.with_attrs(Attr::BOLD)
    }

    /// Shorthand for `with_attrs(Attr::ITALIC)`.
    #[inline]
    #[must_use]
    pub const fn italic(self) -> Self {
        self.with_attrs(Attr::ITALIC)
    }

    /// Shorthand for `with_attrs(Attr::UNDERLINE)`.
    #[inline]
    #[must_use]
    pub const fn underline(self) -> Self {
        self.with_attrs(Attr::UNDERLINE)
    }

    /// Shorthand for `with_attrs(Attr::REVERSE)`.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        self.with_attrs(Attr::REVERSE)
    }

    /// Shorthand for `with_attrs(Attr::DIM)`.
    #[inline]
    #[must_use]
    pub const fn dim(self) -> Self {
        self.with_attrs(Attr::DIM)
    }

    /// Shorthand for `with_attrs(Attr::BLINK)`.
    #[inline]
    #[must_use]
    pub const fn blink(self) -> Self {
        self.with_attrs(Attr::BLINK)
    }

    /// Shorthand for `with_attrs(Attr::HIDDEN)`.
    #[inline]
    #[must_use]
    pub const fn hidden(self) -> Self {
        self.with_attrs(Attr::HIDDEN)
    }

    /// Shorthand for `with_attrs(Attr::STRIKE)`.
    #[inline]
    #[must_use]
    pub const fn strike(self) -> Self {
        self.with_attrs(Attr::STRIKE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_style_is_empty() {
        assert!(Style::EMPTY.is_empty());
        assert!(Style::default().is_empty());
    }

    #[test]
    fn fg_alone_is_not_empty() {
        assert!(!Style::EMPTY.with_fg(Color::BLACK).is_empty());
    }

    #[test]
    fn bg_alone_is_not_empty() {
        assert!(!Style::EMPTY.with_bg(Color::BLACK).is_empty());
    }

    #[test]
    fn attr_alone_is_not_empty() {
        assert!(!Style::EMPTY.bold().is_empty());
    }

    #[test]
    fn builder_chain_sets_everything() {
        let style = Style::EMPTY
            .with_fg(Color::rgb(255, 0, 0))
            .with_bg(Color::rgb(0, 0, 255))
            .bold()
            .underline();

        assert_eq!(style.fg, Some(Color::rgb(255, 0, 0)));
        assert_eq!(style.bg, Some(Color::rgb(0, 0, 255)));
        assert!(style.attrs.contains(Attr::BOLD));
        assert!(style.attrs.contains(Attr::UNDERLINE));
        assert!(!style.attrs.contains(Attr::ITALIC));
    }

    #[test]
    fn with_attrs_is_additive() {
        let style = Style::EMPTY.bold().italic();
        assert!(style.attrs.contains(Attr::BOLD));
        assert!(style.attrs.contains(Attr::ITALIC));
    }

    #[test]
    fn equality_compares_all_slots() {
        let a = Style::EMPTY.with_fg(Color::BLACK).bold();
        let b = Style::EMPTY.with_fg(Color::BLACK).bold();
        let c = Style::EMPTY.with_fg(Color::WHITE).bold();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn attr_all_eight_fit_in_u8() {
        let all = Attr::BOLD
            | Attr::DIM
            | Attr::ITALIC
            | Attr::UNDERLINE
            | Attr::BLINK
            | Attr::REVERSE
            | Attr::HIDDEN
            | Attr::STRIKE;
        assert_eq!(all.bits(), 0xFF);
    }
}
