// SPDX-License-Identifier: MIT
//
// Writer — the stateful control-sequence layer.
//
// Owns a buffered byte sink, a tracked cursor position, and a tracked
// style. Every operation is a no-op at the wire level when it would
// repeat state the terminal is already known to be in — the tracked
// state is the writer's whole reason to exist.
//
// `write_string` advances the tracked column by codepoint count, not
// column width, which can desynchronize from `write_cell`'s width-aware
// advance when the two are mixed on the same line past ASCII. Prefer
// `write_cell` for anything width-sensitive; `write_string` is for runs
// the caller already knows are single-width.

use std::io::{self, Write};

use crate::ansi;
use crate::cell::Cell;
use crate::error::RenderError;
use crate::position::Position;
use crate::style::Style;

/// Default capacity of the internal output buffer.
const DEFAULT_CAPACITY: usize = 16 * 1024;

/// Buffered, cursor-and-style-tracking adapter over a byte sink.
pub struct Writer<W> {
    sink: W,
    buf: Vec<u8>,
    cursor: Position,
    style: Style,
}

impl<W: Write> Writer<W> {
    /// Wrap `sink` with a writer starting at home position and empty style.
    #[must_use]
    pub fn new(sink: W) -> Self {
        Self::with_capacity(sink, DEFAULT_CAPACITY)
    }

    /// As [`Self::new`], pre-sizing the internal buffer to `capacity` bytes.
    #[must_use]
    pub fn with_capacity(sink: W, capacity: usize) -> Self {
        Self {
            sink,
            buf: Vec::with_capacity(capacity),
            cursor: Position::ORIGIN,
            style: Style::EMPTY,
        }
    }

    /// Bytes currently buffered but not yet flushed to the sink.
    #[inline]
    #[must_use]
    pub fn buffered_len(&self) -> usize {
        self.buf.len()
    }

    /// The tracked cursor position.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Position {
        self.cursor
    }

    /// The tracked active style.
    #[inline]
    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Move the cursor to `pos`, emitting nothing if already there.
    pub fn move_cursor(&mut self, pos: Position) {
        if pos == self.cursor {
            return;
        }
        let x = pos.x.max(0) as u16;
        let y = pos.y.max(0) as u16;
        ansi::cursor_to(&mut self.buf, x, y).expect("writes to a Vec<u8> never fail");
        self.cursor = pos;
    }

    /// Set the active style, emitting nothing if already tracked.
    pub fn set_style(&mut self, style: Style) {
        if style == self.style {
            return;
        }
        ansi::write_style(&mut self.buf, style).expect("writes to a Vec<u8> never fail");
        self.style = style;
    }

    /// Write `cell`'s codepoint, updating style first if it differs, then
    /// advance the tracked column by the cell's width.
    pub fn write_cell(&mut self, cell: Cell) {
        self.set_style(cell.style);
        let mut encode_buf = [0u8; 4];
        let bytes = cell.ch.encode_utf8(&mut encode_buf).as_bytes();
        self.buf
            .write_all(bytes)
            .expect("writes to a Vec<u8> never fail");
        self.cursor.x += i32::from(cell.width);
    }

    /// Set `style`, then write `text` verbatim. Advances the tracked
    /// column by `text`'s codepoint count, not its display width — see
    /// the module note above.
    pub fn write_string(&mut self, text: &str, style: Style) {
        self.set_style(style);
        self.buf
            .write_all(text.as_bytes())
            .expect("writes to a Vec<u8> never fail");
        self.cursor.x += text.chars().count() as i32;
    }

    /// Clear the screen. Does not reset the tracked cursor — callers that
    /// rely on home position must issue an explicit move.
    pub fn clear(&mut self) {
        ansi::clear_screen(&mut self.buf).expect("writes to a Vec<u8> never fail");
    }

    /// Clear the current line.
    pub fn clear_line(&mut self) {
        ansi::clear_line(&mut self.buf).expect("writes to a Vec<u8> never fail");
    }

    /// Hide the cursor. Does not alter the tracked position.
    pub fn hide_cursor(&mut self) {
        ansi::cursor_hide(&mut self.buf).expect("writes to a Vec<u8> never fail");
    }

    /// Show the cursor. Does not alter the tracked position.
    pub fn show_cursor(&mut self) {
        ansi::cursor_show(&mut self.buf).expect("writes to a Vec<u8> never fail");
    }

    /// Drain the buffered bytes to the sink and flush it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SinkWrite`] if the sink's write fails, or
    /// [`RenderError::SinkFlush`] if the sink's flush fails.
    pub fn flush(&mut self) -> Result<(), RenderError> {
        self.sink
            .write_all(&self.buf)
            .map_err(RenderError::SinkWrite)?;
        self.buf.clear();
        self.sink.flush().map_err(RenderError::SinkFlush)
    }

    /// Flush; does not tear down the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the sink's write or flush fails.
    pub fn close(&mut self) -> Result<(), RenderError> {
        self.flush()
    }

    /// Reset tracked cursor and style to their initial values without
    /// touching the sink or the buffered bytes. Used to resynchronize the
    /// writer's assumed baseline after a partial-render failure.
    pub fn reset_state(&mut self) {
        self.cursor = Position::ORIGIN;
        self.style = Style::EMPTY;
    }
}
