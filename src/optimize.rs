// SPDX-License-Identifier: MIT
//
// Optimizer — redundant-style pruning, full-redraw judgment, and the other
// passes that sit between the differencer and the writer.
//
// Nothing here is permitted to drop a SetCell: retaining every one is
// always correct, even where it isn't yet minimal. The shadow style
// tracked by `prune_redundant_styles` exists so a future pass can elide
// a style change between two adjacent SetCells of identical style — that
// merge isn't implemented yet, only the bookkeeping it would need.

use std::collections::BTreeMap;

use crate::ops::Operation;
use crate::style::Style;

/// Estimated wire cost, in bytes, of a single `SetCell` operation.
pub const SETCELL_BYTES: usize = 35;
/// Estimated wire cost, in bytes, of a single `MoveCursor` operation.
pub const MOVECURSOR_BYTES: usize = 10;
/// Estimated wire cost, in bytes, of a single `ClearLine` operation.
pub const CLEARLINE_BYTES: usize = 10;

/// Ratio of changed to total cells above which a full redraw is cheaper
/// than an incremental one.
pub const FULL_REDRAW_THRESHOLD: f64 = 0.75;

/// Walk `ops`, tracking the style a `SetCell` would see if it were applied
/// in order starting from `current_style`. Every operation is retained —
/// this never removes a `SetCell` — the walk exists purely to maintain the
/// shadow state future compaction passes would need.
#[must_use]
pub fn prune_redundant_styles(ops: Vec<Operation>, current_style: Style) -> Vec<Operation> {
    let mut last_style = current_style;
    for op in &ops {
        if let Operation::SetCell { cell, .. } = op {
            last_style = cell.style;
        }
    }
    let _ = last_style;
    ops
}

/// Whether a full redraw is cheaper than applying `changed_cells` out of
/// `total_cells` incrementally.
#[inline]
#[must_use]
pub fn should_full_redraw(changed_cells: u32, total_cells: u32) -> bool {
    total_cells > 0 && f64::from(changed_cells) / f64::from(total_cells) > FULL_REDRAW_THRESHOLD
}

/// Estimate the serialized byte size of `ops`, for output-buffer pre-sizing.
#[must_use]
pub fn estimate_bytes(ops: &[Operation]) -> usize {
    ops.iter()
        .map(|op| match op {
            Operation::SetCell { .. } => SETCELL_BYTES,
            Operation::MoveCursor { .. } => MOVECURSOR_BYTES,
            Operation::ClearLine { .. } => CLEARLINE_BYTES,
        })
        .sum()
}

/// Partition `ops` by the row (`position.y`) they target, preserving each
/// row's relative operation order.
#[must_use]
pub fn group_by_line(ops: &[Operation]) -> BTreeMap<i32, Vec<Operation>> {
    let mut groups: BTreeMap<i32, Vec<Operation>> = BTreeMap::new();
    for &op in ops {
        groups.entry(op.position().y).or_default().push(op);
    }
    groups
}

/// Scan same-row `SetCell` pairs whose columns are adjacent (`next.x ==
/// prior.x + prior.cell.width`) and whose styles match. Both operations
/// are retained unchanged; this reserves the hook a future compaction
/// pass (merging adjacent same-style writes into one run) would hang off,
/// without performing any merge itself.
#[must_use]
pub fn find_adjacent_runs(ops: &[Operation]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    for window in ops.windows(2).enumerate() {
        let (i, pair) = window;
        if let (
            Operation::SetCell {
                position: pos_a,
                cell: cell_a,
            },
            Operation::SetCell {
                position: pos_b,
                cell: cell_b,
            },
        ) = (pair[0], pair[1])
        {
            let adjacent = pos_b.y == pos_a.y && pos_b.x == pos_a.x + i32::from(cell_a.width);
            if adjacent && cell_a.style == cell_b.style {
                runs.push((i, i + 1));
            }
        }
    }
    runs
}
