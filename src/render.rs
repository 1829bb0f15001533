// SPDX-License-Identifier: MIT
//
// Renderer — the orchestrator tying diff, optimize, and the writer together.
//
// Single owner, one mutual-exclusion guard wrapping every public entry
// point. Interior components (buffer, differencer, optimizer, writer) do
// no synchronization of their own — the guard is pushed to the outermost
// call and held for the full duration of a render, including sink I/O.

use std::io::Write;
use std::sync::Mutex;

use crate::buffer::Buffer;
use crate::diff;
use crate::error::RenderError;
use crate::ops::Operation;
use crate::optimize;
use crate::position::Position;
use crate::writer::Writer;

/// Default capacity of the writer's internal output buffer.
const DEFAULT_CAPACITY: usize = 16 * 1024;

struct State<W> {
    width: u16,
    height: u16,
    previous: Buffer,
    /// Scratch buffer of matching dimensions, reserved for a future
    /// in-place composition path. Not read on the hot path.
    #[allow(dead_code)]
    current: Buffer,
    writer: Writer<W>,
}

/// Owns the previous/current buffers and the writer; exposes `render`,
/// `clear`, `resize`, cursor visibility, and `close` behind a single guard.
pub struct Renderer<W> {
    state: Mutex<State<W>>,
}

impl<W: Write> Renderer<W> {
    /// Construct a renderer of `width × height` writing to `sink`.
    #[must_use]
    pub fn new(width: u16, height: u16, sink: W) -> Self {
        Self::with_capacity(width, height, sink, DEFAULT_CAPACITY)
    }

    /// As [`Self::new`], overriding the writer's initial buffer capacity.
    #[must_use]
    pub fn with_capacity(width: u16, height: u16, sink: W, capacity: usize) -> Self {
        let previous = Buffer::new(i32::from(width), i32::from(height));
        let current = previous.clone();
        Self {
            state: Mutex::new(State {
                width,
                height,
                previous,
                current,
                writer: Writer::with_capacity(sink, capacity),
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State<W>> {
        self.state.lock().expect("renderer guard poisoned")
    }

    /// Render `next` against the previously committed buffer.
    ///
    /// An absent `next` is a success with no side effects. Dimension
    /// changes and a changed-ratio above the full-redraw threshold both
    /// fall back to [`Self::render_full`]. On a sink failure the batch
    /// aborts and `previous` is not updated.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the sink's write or flush fails.
    pub fn render(&self, next: Option<&Buffer>) -> Result<(), RenderError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("render").entered();

        let Some(next) = next else {
            return Ok(());
        };

        let mut state = self.lock();

        if next.width() != state.width || next.height() != state.height {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                old_w = state.width,
                old_h = state.height,
                new_w = next.width(),
                new_h = next.height(),
                "dimension change forces full redraw"
            );
            return Self::render_full_locked(&mut state, next);
        }

        let ops = diff::diff(Some(&state.previous), next);
        if ops.is_empty() {
            return Ok(());
        }

        let current_style = state.writer.style();
        let ops = optimize::prune_redundant_styles(ops, current_style);
        let total = next.total_cells();
        let changed = ops.len() as u32;

        if optimize::should_full_redraw(changed, total) {
            #[cfg(feature = "tracing")]
            tracing::debug!(changed, total, "change ratio exceeds full-redraw threshold");
            return Self::render_full_locked(&mut state, next);
        }

        Self::apply_ops(&mut state.writer, &ops)?;
        state.writer.flush()?;
        state.previous = next.clone();
        Ok(())
    }

    /// Unconditionally redraw: clear, move home, write every non-empty
    /// cell of `next` in row-major order, flush, and adopt `next`'s
    /// dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the sink's write or flush fails.
    pub fn render_full(&self, next: &Buffer) -> Result<(), RenderError> {
        let mut state = self.lock();
        Self::render_full_locked(&mut state, next)
    }

    fn render_full_locked(state: &mut State<W>, next: &Buffer) -> Result<(), RenderError> {
        state.writer.clear();
        state.writer.move_cursor(Position::ORIGIN);

        for y in 0..next.height() {
            for x in 0..next.width() {
                let pos = Position::new(i32::from(x), i32::from(y));
                let cell = next.get(pos);
                if !cell.is_empty() {
                    state.writer.move_cursor(pos);
                    state.writer.write_cell(cell);
                }
            }
        }

        state.writer.flush()?;
        state.width = next.width();
        state.height = next.height();
        state.current = Buffer::new(i32::from(state.width), i32::from(state.height));
        state.previous = next.clone();
        Ok(())
    }

    fn apply_ops(writer: &mut Writer<W>, ops: &[Operation]) -> Result<(), RenderError> {
        for &op in ops {
            match op {
                Operation::SetCell { position, cell } => {
                    writer.move_cursor(position);
                    writer.write_cell(cell);
                }
                Operation::ClearLine { position } => {
                    writer.move_cursor(position);
                    writer.clear_line();
                }
                Operation::MoveCursor { position } => {
                    writer.move_cursor(position);
                }
            }
        }
        Ok(())
    }

    /// Clear the screen and zero both buffers.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the sink's write or flush fails.
    pub fn clear(&self) -> Result<(), RenderError> {
        let mut state = self.lock();
        state.writer.clear();
        state.writer.move_cursor(Position::ORIGIN);
        state.writer.flush()?;
        state.previous = Buffer::new(i32::from(state.width), i32::from(state.height));
        state.current = Buffer::new(i32::from(state.width), i32::from(state.height));
        Ok(())
    }

    /// Reallocate both buffers at `(new_width, new_height)` and clear,
    /// re-synchronizing the writer's tracked cursor.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the sink's write or flush fails.
    pub fn resize(&self, new_width: u16, new_height: u16) -> Result<(), RenderError> {
        let mut state = self.lock();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            old_w = state.width,
            old_h = state.height,
            new_w = new_width,
            new_h = new_height,
            "resize"
        );
        state.width = new_width;
        state.height = new_height;
        state.previous = Buffer::new(i32::from(new_width), i32::from(new_height));
        state.current = Buffer::new(i32::from(new_width), i32::from(new_height));
        state.writer.clear();
        state.writer.move_cursor(Position::ORIGIN);
        state.writer.flush()
    }

    /// Hide the cursor and flush.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the sink's write or flush fails.
    pub fn hide_cursor(&self) -> Result<(), RenderError> {
        let mut state = self.lock();
        state.writer.hide_cursor();
        state.writer.flush()
    }

    /// Show the cursor and flush.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if the sink's write or flush fails.
    pub fn show_cursor(&self) -> Result<(), RenderError> {
        let mut state = self.lock();
        state.writer.show_cursor();
        state.writer.flush()
    }

    /// Current tracked width.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.lock().width
    }

    /// Current tracked height.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.lock().height
    }

    /// Bytes currently buffered in the writer but not yet flushed.
    #[must_use]
    pub fn buffered_bytes(&self) -> usize {
        self.lock().writer.buffered_len()
    }

    /// Best-effort show the cursor, then flush and close the writer,
    /// returning the final failure (if any).
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if flushing or closing the writer fails.
    pub fn close(&self) -> Result<(), RenderError> {
        let mut state = self.lock();
        state.writer.show_cursor();
        state.writer.close()
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::cell::Cell;
    use crate::style::Style;

    proptest! {
        // Idempotent render (property 1): rendering the same buffer twice
        // emits nothing the second time, for arbitrary dimensions and a
        // scattering of written cells.
        #[test]
        fn identical_render_twice_emits_nothing_the_second_time(
            width in 1u16..30,
            height in 1u16..20,
            num_cells in 0usize..40,
        ) {
            let renderer = Renderer::new(width, height, Vec::new());
            let mut buf = Buffer::new(i32::from(width), i32::from(height));
            for i in 0..num_cells {
                let x = (i as i32 * 7 + 3) % i32::from(width);
                let y = (i as i32 * 11 + 5) % i32::from(height);
                buf.set(Position::new(x, y), Cell::new('x', Style::EMPTY, 1));
            }

            renderer.render(Some(&buf)).unwrap();
            renderer.render(Some(&buf)).unwrap();
            prop_assert_eq!(renderer.buffered_bytes(), 0);
        }
    }
}
