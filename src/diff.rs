// SPDX-License-Identifier: MIT
//
// Differencer — turns a (previous, next) buffer pair into an operation list.
//
// Row-major order is the canonical output order; nothing downstream is
// permitted to reorder it. When there is no previous frame to compare
// against, or the dimensions changed, the differencer falls back to a
// full-buffer listing rather than comparing cell-by-cell against a buffer
// that no longer describes the same geometry.

use crate::buffer::Buffer;
use crate::cell::Cell;
use crate::ops::Operation;
use crate::position::Position;

/// Produce the ordered operation list turning `previous` into `next`.
///
/// `previous` of `None`, or dimensions differing from `next`, triggers a
/// full-buffer listing: every non-empty cell of `next`, row-major.
/// Otherwise only positions where the two buffers disagree are emitted.
#[must_use]
pub fn diff(previous: Option<&Buffer>, next: &Buffer) -> Vec<Operation> {
    match previous {
        Some(prev) if prev.width() == next.width() && prev.height() == next.height() => {
            diff_same_size(prev, next)
        }
        _ => full_buffer(next),
    }
}

/// Every non-empty cell of `buf`, row-major. Used for the first render,
/// after a resize, and whenever no prior frame exists to diff against.
#[must_use]
pub fn full_buffer(buf: &Buffer) -> Vec<Operation> {
    let mut ops = Vec::new();
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            let pos = Position::new(i32::from(x), i32::from(y));
            let cell = buf.get(pos);
            if !cell.is_empty() {
                ops.push(Operation::SetCell { position: pos, cell });
            }
        }
    }
    ops
}

fn diff_same_size(prev: &Buffer, next: &Buffer) -> Vec<Operation> {
    let mut ops = Vec::new();
    for y in 0..next.height() {
        for x in 0..next.width() {
            let pos = Position::new(i32::from(x), i32::from(y));
            let next_cell = next.get(pos);
            if prev.get(pos) != next_cell {
                ops.push(Operation::SetCell {
                    position: pos,
                    cell: next_cell,
                });
            }
        }
    }
    ops
}

/// Diff two equal-length cell lists representing the same row, returning
/// `(x, cell)` pairs for every differing index. Used by callers (and
/// tests) that manage lines directly rather than whole buffers.
#[must_use]
pub fn diff_line(previous: &[Cell], next: &[Cell]) -> Vec<(u16, Cell)> {
    previous
        .iter()
        .zip(next)
        .enumerate()
        .filter_map(|(x, (p, n))| (p != n).then_some((x as u16, *n)))
        .collect()
}

/// Count of positions where `previous` and `next` disagree, treating a
/// dimension mismatch as every cell of `next` differing.
#[must_use]
pub fn count_changes(previous: Option<&Buffer>, next: &Buffer) -> u32 {
    match previous {
        Some(prev) if prev.width() == next.width() && prev.height() == next.height() => {
            let mut count = 0;
            for y in 0..next.height() {
                for x in 0..next.width() {
                    let pos = Position::new(i32::from(x), i32::from(y));
                    if prev.get(pos) != next.get(pos) {
                        count += 1;
                    }
                }
            }
            count
        }
        _ => next.total_cells(),
    }
}

/// Whether `previous` and `next` differ anywhere, short-circuiting on the
/// first mismatch.
#[must_use]
pub fn has_changes(previous: Option<&Buffer>, next: &Buffer) -> bool {
    match previous {
        Some(prev) if prev.width() == next.width() && prev.height() == next.height() => {
            for y in 0..next.height() {
                for x in 0..next.width() {
                    let pos = Position::new(i32::from(x), i32::from(y));
                    if prev.get(pos) != next.get(pos) {
                        return true;
                    }
                }
            }
            false
        }
        _ => next.total_cells() > 0,
    }
}
