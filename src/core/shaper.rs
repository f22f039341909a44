//! Structural grid operations
//!
//! Each function consumes a [`Grid`] and returns one satisfying the stated
//! postcondition. The padding guarantees are no-ops on grids that already
//! satisfy them.

use crate::types::{CellValue, ColumnId, Grid};
use tracing::{debug, warn};

/// How a forward-fill decides which cells need a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Only absent/NaN cells are filled; whitespace text is carried like any value
    Missing,
    /// Absent, NaN and whitespace-only text are all filled and never carried
    Blank,
}

impl FillMode {
    fn needs_fill(self, value: &CellValue) -> bool {
        match self {
            FillMode::Missing => value.is_missing(),
            FillMode::Blank => value.is_blank(),
        }
    }
}

/// Remove the columns whose identifier appears in `letters`, then relabel
/// the survivors contiguously from A. Identifiers are matched against the
/// grid as it stands before removal. If nothing would survive, the grid is
/// returned unchanged.
pub fn drop_columns(mut grid: Grid, letters: &[ColumnId]) -> Grid {
    let survivors = grid.columns().filter(|c| !letters.contains(c)).count();
    if survivors == 0 {
        warn!("Column pruning would remove every column; keeping all columns");
        return grid;
    }

    grid.retain_columns(|c| !letters.contains(&c));
    grid
}

/// Pad with empty columns on the right until `up_to` exists
pub fn ensure_column_span(mut grid: Grid, up_to: ColumnId) -> Grid {
    while grid.width() < up_to.ordinal() {
        grid.push_blank_column();
    }
    grid
}

/// Pad with blank rows at the bottom until at least `min_rows` exist
pub fn ensure_min_rows(mut grid: Grid, min_rows: usize) -> Grid {
    if grid.height() < min_rows {
        let missing = min_rows - grid.height();
        let at = grid.height();
        grid.insert_blank_rows(at, missing);
    }
    grid
}

/// Insert `count` blank rows immediately after `after_row`
pub fn insert_blank_rows(mut grid: Grid, after_row: usize, count: usize) -> Grid {
    if count > 0 {
        grid.insert_blank_rows(after_row + 1, count);
    }
    grid
}

/// Drop one row and re-index the rows below it
pub fn drop_row(mut grid: Grid, idx: usize) -> Grid {
    grid.remove_row(idx);
    grid
}

/// Within rows `from_row..`, move each value of `col` down by `offset`.
/// The first `offset` cells of the range become empty; values pushed past
/// the last row are discarded.
pub fn shift_column_down(mut grid: Grid, col: ColumnId, from_row: usize, offset: usize) -> Grid {
    if col.index() >= grid.width() || from_row >= grid.height() {
        return grid;
    }

    let mut values: Vec<CellValue> = grid
        .column_mut_from(col, from_row)
        .map(std::mem::take)
        .collect();
    let len = values.len();
    let keep = len.saturating_sub(offset);
    values.truncate(keep);

    let shifted = std::iter::repeat(CellValue::Empty)
        .take(len - keep)
        .chain(values);
    for (cell, value) in grid.column_mut_from(col, from_row).zip(shifted) {
        *cell = value;
    }
    grid
}

/// Forward-fill `col` from `from_row` to the end. Only values seen inside
/// the range are carried, so leading gaps of the range stay empty.
pub fn forward_fill(mut grid: Grid, col: ColumnId, from_row: usize, mode: FillMode) -> Grid {
    if col.index() >= grid.width() {
        return grid;
    }

    let mut carried: Option<CellValue> = None;
    for (offset, cell) in grid.column_mut_from(col, from_row).enumerate() {
        if !mode.needs_fill(cell) {
            carried = Some(cell.clone());
        } else if let Some(value) = &carried {
            debug!("Row {}: copying {:?}", from_row + offset + 1, value);
            *cell = value.clone();
        }
    }
    grid
}

/// Keep rows with index below `keep_below` unconditionally; from there on
/// remove every row whose `col` value is blank.
pub fn drop_rows_with_blank(mut grid: Grid, col: ColumnId, keep_below: usize) -> Grid {
    if col.index() >= grid.width() {
        return grid;
    }

    grid.retain_rows(|idx, row| idx < keep_below || !row[col.index()].is_blank());
    grid
}
