//! Detail sheet pipeline
//!
//! Rewrites the raw accounts-receivable detail table into the fixed report
//! layout. The row and column positions below are the report format that
//! downstream consumers read by cell address:
//!
//! | row | content                                          |
//! |-----|--------------------------------------------------|
//! | 0   | overdue label (G1) and overdue percentage (H1)   |
//! | 1   | company name (A2)                                |
//! | 2   | report title (A3)                                |
//! | 4   | grand totals for the sum columns                 |
//! | 5   | section label (A6)                               |
//! | 6.. | per-customer data rows                           |
//!
//! The transform is one-directional: running it over its own output does not
//! reproduce that output.

use super::aggregator::{populate_totals, ratio};
use super::keywords::{self, KeywordSet};
use super::shaper::{
    drop_columns, drop_row, drop_rows_with_blank, ensure_column_span, ensure_min_rows,
    forward_fill, insert_blank_rows, shift_column_down, FillMode,
};
use crate::config::ReportConfig;
use crate::error::CarteraResult;
use crate::types::{CellValue, ColumnId, Grid};
use tracing::{debug, info};

const COL_A: ColumnId = ColumnId::new(0);
const COL_D: ColumnId = ColumnId::new(3);
const COL_G: ColumnId = ColumnId::new(6);
const COL_H: ColumnId = ColumnId::new(7);
const COL_J: ColumnId = ColumnId::new(9);
/// Rightmost column every intermediate and final grid must span
const COL_SPAN: ColumnId = ColumnId::new(14);

const MIN_ROWS: usize = 7;
const EMPTY_INPUT_WIDTH: usize = 15;

const LABEL_SHIFT_FROM: usize = 3;
const LABEL_SHIFT: usize = 3;
const SUMMARY_ROW: usize = 4;
const KEEP_ROWS_BELOW: usize = 5;
const INSERT_AFTER_ROW: usize = 2;
const INSERTED_ROWS: usize = 2;
const DATA_START_ROW: usize = 6;
const SPACER_ROW: usize = 5;
const SECTION_ROW: usize = 5;

/// Stateless transformation of the detail table
#[derive(Debug, Clone)]
pub struct DetailPipeline {
    removed_columns: Vec<ColumnId>,
    sum_columns: Vec<ColumnId>,
    keywords: KeywordSet,
    company_name: String,
    report_title: String,
    overdue_label: String,
    section_label: String,
}

impl DetailPipeline {
    pub fn new(config: &ReportConfig) -> CarteraResult<Self> {
        Ok(Self {
            removed_columns: config.removed_columns()?,
            sum_columns: config.summed_columns()?,
            keywords: KeywordSet::new(&config.keywords),
            company_name: config.company_name.clone(),
            report_title: config.report_title.clone(),
            overdue_label: config.overdue_label.clone(),
            section_label: config.section_label.clone(),
        })
    }

    /// Run every step in order over a raw detail grid
    pub fn process(&self, grid: Grid) -> Grid {
        info!(
            "Processing detail sheet: {} rows x {} columns",
            grid.height(),
            grid.width()
        );

        let grid = if grid.is_empty() {
            debug!("Empty input; synthesizing a blank A..O grid");
            Grid::blank(MIN_ROWS, EMPTY_INPUT_WIDTH)
        } else {
            grid
        };

        let grid = drop_columns(grid, &self.removed_columns);
        let grid = ensure_column_span(grid, COL_SPAN);
        let grid = ensure_min_rows(grid, MIN_ROWS);
        debug!("Pruned to {} columns", grid.width());

        let grid = shift_column_down(grid, COL_A, LABEL_SHIFT_FROM, LABEL_SHIFT);

        let grid = keywords::clear(grid, &self.keywords, SUMMARY_ROW);

        let before = grid.height();
        let grid = drop_rows_with_blank(grid, COL_D, KEEP_ROWS_BELOW);
        debug!("Dropped {} rows without a column D value", before - grid.height());
        let grid = ensure_min_rows(grid, MIN_ROWS);

        let grid = forward_fill(grid, COL_A, SUMMARY_ROW, FillMode::Missing);

        let grid = insert_blank_rows(grid, INSERT_AFTER_ROW, INSERTED_ROWS);
        let grid = ensure_min_rows(grid, MIN_ROWS);
        let grid = ensure_column_span(grid, COL_SPAN);

        let grid = self.populate_totals(grid);
        let grid = self.populate_headers(grid);

        let grid = ensure_min_rows(grid, MIN_ROWS + 1);
        let grid = drop_row(grid, SPACER_ROW);

        let grid = ensure_min_rows(grid, MIN_ROWS);
        let mut grid = ensure_column_span(grid, COL_SPAN);

        grid.set(SUMMARY_ROW, COL_A, CellValue::Empty);
        grid.set(SECTION_ROW, COL_A, self.section_label.as_str());

        debug!("Forward-filling column A from row {}", DATA_START_ROW + 1);
        let grid = forward_fill(grid, COL_A, DATA_START_ROW, FillMode::Blank);

        info!(
            "Detail sheet processed: {} rows x {} columns",
            grid.height(),
            grid.width()
        );
        grid
    }

    fn populate_totals(&self, grid: Grid) -> Grid {
        let present: Vec<ColumnId> = self
            .sum_columns
            .iter()
            .copied()
            .filter(|c| c.index() < grid.width())
            .collect();
        populate_totals(grid, &present, SUMMARY_ROW, DATA_START_ROW)
    }

    /// Fixed header labels plus the overdue percentage (J5 / G5 * 100) in H1
    fn populate_headers(&self, mut grid: Grid) -> Grid {
        grid.set(1, COL_A, self.company_name.as_str());
        grid.set(2, COL_A, self.report_title.as_str());
        grid.set(0, COL_G, self.overdue_label.as_str());

        let total_general = grid.cell(SUMMARY_ROW, COL_G).as_number();
        let total_overdue = grid.cell(SUMMARY_ROW, COL_J).as_number();
        let pct = ratio(total_overdue, total_general) * 100.0;
        debug!("Overdue portfolio ratio: {:.2}%", pct);

        grid.set(0, COL_H, pct);
        grid
    }
}
