// SPDX-License-Identifier: MIT
//
// difftty demo — renders a static frame, then a one-cell diff, to stdout.
//
// This wires the complete pipeline: Buffer -> Renderer (diff -> optimize
// -> writer). No raw mode, no input: that's facade territory, not this
// crate's job.
//
// Usage:
//   cargo run --example demo

use std::io;

use difftty::buffer::Buffer;
use difftty::color::Color;
use difftty::render::Renderer;
use difftty::style::Style;

fn main() -> io::Result<()> {
    let renderer = Renderer::new(40, 4, io::stdout());

    let header_style = Style::EMPTY.with_fg(Color::rgb(100, 200, 255)).bold();
    let mut frame = Buffer::new(40, 4);
    frame.set_line(0, "difftty demo", header_style);
    frame.set_line(1, "frame 1", Style::EMPTY);

    renderer
        .render(Some(&frame))
        .map_err(|e| io::Error::other(e.to_string()))?;

    // Only the second line changes; the renderer emits a minimal diff.
    frame.set_line(1, "frame 2", Style::EMPTY);
    renderer
        .render(Some(&frame))
        .map_err(|e| io::Error::other(e.to_string()))?;

    renderer
        .close()
        .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(())
}
