// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit — that's the writer's job. This module
// only knows the byte-level encoding of the vocabulary the engine uses:
// unconditional 24-bit color and standard SGR, nothing negotiated.
//
// All cursor positions are 0-indexed in our API and converted to 1-indexed
// for the terminal (the CUP sequence is 1-based).

use std::io::{self, Write};

use crate::style::{Attr, Style};

/// Move the cursor to `(x, y)` using the CUP (Cursor Position) sequence.
#[inline]
pub fn cursor_to(w: &mut impl Write, x: u16, y: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

/// Hide the cursor (DECTCEM reset).
#[inline]
pub fn cursor_hide(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25l")
}

/// Show the cursor (DECTCEM set).
#[inline]
pub fn cursor_show(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25h")
}

/// Clear the entire screen (ED 2).
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2J")
}

/// Clear the current line (EL 2).
#[inline]
pub fn clear_line(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2K")
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Serialize `style` as a single SGR sequence: foreground, background,
/// bold, dim, italic, underline, blink, reverse, hidden, strike, in that
/// order, semicolon-joined. An empty style emits nothing — the order is
/// a wire contract, not an implementation detail; changing it changes
/// bytes callers may be capturing.
pub fn write_style(w: &mut impl Write, style: Style) -> io::Result<()> {
    if style.is_empty() {
        return Ok(());
    }

    let mut params = Vec::with_capacity(10);
    if let Some(fg) = style.fg {
        params.push(format!("38;2;{};{};{}", fg.r, fg.g, fg.b));
    }
    if let Some(bg) = style.bg {
        params.push(format!("48;2;{};{};{}", bg.r, bg.g, bg.b));
    }
    for (flag, code) in [
        (Attr::BOLD, "1"),
        (Attr::DIM, "2"),
        (Attr::ITALIC, "3"),
        (Attr::UNDERLINE, "4"),
        (Attr::BLINK, "5"),
        (Attr::REVERSE, "7"),
        (Attr::HIDDEN, "8"),
        (Attr::STRIKE, "9"),
    ] {
        if style.attrs.contains(flag) {
            params.push(code.to_string());
        }
    }

    write!(w, "\x1b[{}m", params.join(";"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn cursor_to_is_one_based() {
        assert_eq!(rendered(|w| cursor_to(w, 0, 0)), "\x1b[1;1H");
        assert_eq!(rendered(|w| cursor_to(w, 4, 9)), "\x1b[10;5H");
    }

    #[test]
    fn cursor_visibility_sequences() {
        assert_eq!(rendered(cursor_hide), "\x1b[?25l");
        assert_eq!(rendered(cursor_show), "\x1b[?25h");
    }

    #[test]
    fn clear_sequences() {
        assert_eq!(rendered(clear_screen), "\x1b[2J");
        assert_eq!(rendered(clear_line), "\x1b[2K");
    }

    #[test]
    fn reset_sequence() {
        assert_eq!(rendered(reset), "\x1b[0m");
    }

    #[test]
    fn empty_style_serializes_to_empty_string() {
        assert_eq!(rendered(|w| write_style(w, Style::EMPTY)), "");
    }

    #[test]
    fn bold_only_style() {
        assert_eq!(rendered(|w| write_style(w, Style::EMPTY.bold())), "\x1b[1m");
    }

    #[test]
    fn red_foreground_only() {
        let style = Style::EMPTY.with_fg(Color::rgb(255, 0, 0));
        assert_eq!(rendered(|w| write_style(w, style)), "\x1b[38;2;255;0;0m");
    }

    #[test]
    fn background_24bit() {
        let style = Style::EMPTY.with_bg(Color::rgb(0, 128, 255));
        assert_eq!(rendered(|w| write_style(w, style)), "\x1b[48;2;0;128;255m");
    }

    #[test]
    fn serialization_order_is_pinned() {
        let style = Style::EMPTY
            .with_fg(Color::rgb(1, 2, 3))
            .with_bg(Color::rgb(4, 5, 6))
            .bold()
            .dim()
            .italic()
            .underline()
            .blink()
            .reverse()
            .hidden()
            .strike();
        assert_eq!(
            rendered(|w| write_style(w, style)),
            "\x1b[38;2;1;2;3;48;2;4;5;6;1;2;3;4;5;7;8;9m"
        );
    }

    #[test]
    fn only_set_attrs_are_emitted() {
        let style = Style::EMPTY.italic().reverse();
        assert_eq!(rendered(|w| write_style(w, style)), "\x1b[3;7m");
    }
}
