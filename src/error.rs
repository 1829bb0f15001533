// SPDX-License-Identifier: MIT
//
// RenderError — the two ways a render can fail.
//
// Everything that can be expressed as normalization or a silent no-op (see
// the data model's boundary rules) does not appear here; this taxonomy
// covers only failures the underlying sink itself reports.

use std::io;

/// A failure surfaced from the byte sink.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The sink's write call failed.
    #[error("sink write failed: {0}")]
    SinkWrite(#[source] io::Error),
    /// The sink's flush call failed.
    #[error("sink flush failed: {0}")]
    SinkFlush(#[source] io::Error),
}
