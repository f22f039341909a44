//! Aggregate row and overdue ratio

use crate::types::{ColumnId, Grid};

/// Denominators closer to zero than this are treated as zero
const ZERO_TOLERANCE: f64 = 1e-9;

/// Sum the numeric values of `col` at rows `start_row..`.
///
/// Cells that do not coerce to a number are excluded rather than counted
/// as zero. Returns 0.0 when nothing coerces.
pub fn sum_region(grid: &Grid, col: ColumnId, start_row: usize) -> f64 {
    grid.column(col)
        .skip(start_row)
        .filter_map(|cell| cell.as_number())
        .sum()
}

/// `numerator / denominator`, or 0.0 when the denominator is missing,
/// non-finite or zero. A missing numerator counts as 0.0.
pub fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> f64 {
    match denominator {
        Some(d) if d.is_finite() && d.abs() > ZERO_TOLERANCE => numerator.unwrap_or(0.0) / d,
        _ => 0.0,
    }
}

/// Write `sum_region(col, start_row)` into `summary_row` for every column in `columns`
pub fn populate_totals(
    mut grid: Grid,
    columns: &[ColumnId],
    summary_row: usize,
    start_row: usize,
) -> Grid {
    for &col in columns {
        let total = sum_region(&grid, col, start_row);
        grid.set(summary_row, col, total);
    }
    grid
}
