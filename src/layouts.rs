//! Automatic arrangement of the windows in a tab area.
use crate::models::{Size, SubWindow, WindowRect, WindowState};

/// Grid shape for `count` windows: `rows = ceil(sqrt(count))` and
/// `cols = ceil(count / rows)`, the smallest near-square grid with
/// `rows * cols >= count`.
#[must_use]
pub fn grid_shape(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let rows = (count as f64).sqrt().ceil() as usize;
    let cols = count.div_ceil(rows);
    (rows, cols)
}

/// Tile all windows of an area into a near-square grid, row-major in
/// insertion order.
///
/// Cell edges come from integer division of the area size, and the windows
/// of a partially filled last row split the full width between them, so the
/// union of all cells covers the area exactly with no gap or overlap.
///
/// Tiling is a one-shot layout, not a persistent constraint: it clears any
/// anchor on the affected windows and forces them to `Normal`.
pub fn tile_windows(area: Size, windows: &mut [SubWindow]) {
    let count = windows.len();
    if count == 0 {
        return;
    }
    let (rows, cols) = grid_shape(count);
    tracing::debug!(count, rows, cols, "tiling windows");

    for row in 0..rows {
        let start = row * cols;
        if start >= count {
            break;
        }
        let in_row = cols.min(count - start);
        let top = cell_edge(area.height, row, rows);
        let bottom = cell_edge(area.height, row + 1, rows);
        for col in 0..in_row {
            let left = cell_edge(area.width, col, in_row);
            let right = cell_edge(area.width, col + 1, in_row);
            let win = &mut windows[start + col];
            win.clear_anchor();
            win.set_state(WindowState::Normal);
            win.set_rect_only(WindowRect::new(left, top, right - left, bottom - top));
        }
    }
}

const fn cell_edge(extent: i32, index: usize, divisions: usize) -> i32 {
    (extent as i64 * index as i64 / divisions as i64) as i32
}
