//! Workbook importer - raw detail sheet (.xlsx) → Grid

use crate::core::shaper::ensure_min_rows;
use crate::error::{CarteraError, CarteraResult};
use crate::types::{CellValue, ColumnId, Grid};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use chrono::{Duration, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Rows every extracted grid is padded to
const MIN_EXTRACTED_ROWS: usize = 7;
/// 9999-12-31
const MAX_EXCEL_SERIAL: f64 = 2_958_465.999_999;

/// Inclusive, 0-based rectangle of a merged cell region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedRegion {
    pub first_row: usize,
    pub first_col: usize,
    pub last_row: usize,
    pub last_col: usize,
}

/// Reads the detail sheet of a source workbook
pub struct WorkbookImporter {
    path: PathBuf,
}

impl WorkbookImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Extract the first sheet as a merged-flattened grid with empty columns
    /// dropped, relabelled from A and padded to at least 7 rows
    pub fn extract_detail_grid(&self) -> CarteraResult<Grid> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| CarteraError::Import(format!("Failed to open Excel file: {}", e)))?;

        let sheet_names = workbook.sheet_names();
        let Some(sheet_name) = sheet_names.first().cloned() else {
            return Err(CarteraError::EmptyWorkbook(self.path.clone()));
        };
        info!("Reading detail data from sheet {:?}", sheet_name);

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| {
                CarteraError::Import(format!("Failed to read sheet {}: {}", sheet_name, e))
            })?;

        workbook
            .load_merged_regions()
            .map_err(|e| CarteraError::Import(format!("Failed to read merged cells: {}", e)))?;
        let regions: Vec<MergedRegion> = workbook
            .merged_regions_by_sheet(&sheet_name)
            .into_iter()
            .map(|(_, _, dims)| MergedRegion {
                first_row: dims.start.0 as usize,
                first_col: dims.start.1 as usize,
                last_row: dims.end.0 as usize,
                last_col: dims.end.1 as usize,
            })
            .collect();
        // Workbook (and its file handle) released here
        drop(workbook);

        let mut grid = range_to_grid(&range);
        debug!(
            "Raw sheet: {} rows x {} columns, {} merged regions",
            grid.height(),
            grid.width(),
            regions.len()
        );
        flatten_merged_regions(&mut grid, &regions);

        let grid = drop_empty_columns(grid);
        Ok(ensure_min_rows(grid, MIN_EXTRACTED_ROWS))
    }
}

/// Place every cell at its absolute sheet position (sheet row 1 → grid row 0)
fn range_to_grid(range: &Range<Data>) -> Grid {
    let (Some(start), Some(end)) = (range.start(), range.end()) else {
        return Grid::new(0);
    };

    let mut grid = Grid::blank(end.0 as usize + 1, end.1 as usize + 1);
    for (row, col, data) in range.cells() {
        let value = data_to_cell(data);
        if value != CellValue::Empty {
            grid.set(
                start.0 as usize + row,
                ColumnId::new(start.1 as usize + col),
                value,
            );
        }
    }
    grid
}

/// Convert a calamine value to a grid cell
pub fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
        Data::DateTime(dt) => CellValue::Text(serial_to_text(dt.as_f64())),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}

/// Render an Excel serial date as `YYYY-MM-DD`, adding `HH:MM:SS` when a time part exists
fn serial_to_text(serial: f64) -> String {
    if !(0.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return serial.to_string();
    }
    // Serials below 60 predate Excel's phantom 1900-02-29
    let epoch = if serial < 60.0 {
        NaiveDate::from_ymd_opt(1899, 12, 31)
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)
    };
    let Some(epoch) = epoch.and_then(|d| d.and_hms_opt(0, 0, 0)) else {
        return serial.to_string();
    };

    let seconds = (serial * 86_400.0).round() as i64;
    let Some(moment) = epoch.checked_add_signed(Duration::seconds(seconds)) else {
        return serial.to_string();
    };

    if seconds % 86_400 == 0 {
        moment.format("%Y-%m-%d").to_string()
    } else {
        moment.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Copy each region's top-left value into the empty cells of that region
pub fn flatten_merged_regions(grid: &mut Grid, regions: &[MergedRegion]) {
    for region in regions {
        let top_left = grid
            .cell(region.first_row, ColumnId::new(region.first_col))
            .clone();
        if top_left == CellValue::Empty {
            continue;
        }

        for row in region.first_row..=region.last_row {
            for col in region.first_col..=region.last_col {
                let col = ColumnId::new(col);
                if *grid.cell(row, col) == CellValue::Empty {
                    grid.set(row, col, top_left.clone());
                }
            }
        }
    }
}

/// Remove every column without a single present value; survivors are relabelled from A
pub fn drop_empty_columns(mut grid: Grid) -> Grid {
    let occupied: Vec<bool> = grid
        .columns()
        .map(|col| grid.column(col).any(|cell| !cell.is_missing()))
        .collect();
    grid.retain_columns(|col| occupied[col.index()]);
    grid
}
