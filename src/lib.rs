// SPDX-License-Identifier: MIT
//
// difftty — a differential terminal rendering engine.
//
// Given a virtual screen (a grid of styled cells), this crate computes the
// minimal sequence of ANSI control-code bytes needed to bring a real
// terminal's visible state in line with it, and writes them to a byte sink.
// It does not detect terminal capabilities, parse input, or manage the
// terminal's raw-mode lifecycle — those are facade concerns that sit above
// this engine.
//
// The pipeline, leaf-first: value primitives (`position`, `color`,
// `style`) feed the `cell` model; `buffer` is the fixed-dimension grid of
// cells with the Unicode-aware string blitter; `diff` turns a (previous,
// next) buffer pair into an `ops::Operation` list; `optimize` prunes and
// judges that list; `writer` serializes operations as tracked-cursor,
// tracked-style ANSI bytes; `render` is the single-owner orchestrator that
// ties the rest together behind one guard.

#[allow(clippy::missing_errors_doc)] // ANSI functions all just forward io::Write errors.
pub mod ansi;
pub mod buffer;
pub mod cell;
pub mod color;
pub mod diff;
pub mod error;
pub mod ops;
pub mod optimize;
pub mod position;
pub mod render;
pub mod style;
pub mod writer;
