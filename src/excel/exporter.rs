//! Report exporter - Grid sheets → styled .xlsx

use crate::error::{CarteraError, CarteraResult};
use crate::types::{CellValue, ColumnId, Grid};
use chrono::{NaiveDate, NaiveDateTime};
use rust_xlsxwriter::{Color, Format, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use tracing::{info, warn};

/// Excel worksheet maximum row count
const MAX_ROWS: usize = 1_048_576;
/// Excel worksheet maximum column count
const MAX_COLS: usize = 16_384;

/// Dark blue band behind the section rows and the overdue label
const BAND_COLOR: u32 = 0x17365D;
/// G1
const BANDED_HEADER_CELL: (usize, ColumnId) = (0, ColumnId::new(6));
/// Band width used when the detail grid has no columns
const DEFAULT_BAND_WIDTH: usize = 15;

/// One output sheet
#[derive(Debug, Clone)]
pub struct SheetOutput {
    pub name: String,
    pub grid: Grid,
}

impl SheetOutput {
    pub fn new(name: impl Into<String>, grid: Grid) -> Self {
        Self {
            name: name.into(),
            grid,
        }
    }
}

/// Number formats for text cells written back as dates
const DATE_FORMAT: &str = "yyyy-mm-dd";
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Band fill plus the date formats, plain and banded
struct CellFormats {
    band: Format,
    date: Format,
    datetime: Format,
    band_date: Format,
    band_datetime: Format,
}

impl CellFormats {
    fn new() -> Self {
        let band = Format::new()
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(BAND_COLOR))
            .set_font_color(Color::White);
        Self {
            date: Format::new().set_num_format(DATE_FORMAT),
            datetime: Format::new().set_num_format(DATETIME_FORMAT),
            band_date: band.clone().set_num_format(DATE_FORMAT),
            band_datetime: band.clone().set_num_format(DATETIME_FORMAT),
            band,
        }
    }

    fn for_date(&self, banded: bool, has_time: bool) -> &Format {
        match (banded, has_time) {
            (false, false) => &self.date,
            (false, true) => &self.datetime,
            (true, false) => &self.band_date,
            (true, true) => &self.band_datetime,
        }
    }
}

/// Writes processed grids as literal values, no header row
pub struct ReportExporter {
    styled_sheet: String,
    banded_rows: Vec<usize>,
    formats: CellFormats,
}

impl ReportExporter {
    /// `styled_sheet` gets `banded_rows` and G1 filled; other sheets are written plain
    pub fn new(styled_sheet: impl Into<String>, banded_rows: Vec<usize>) -> Self {
        Self {
            styled_sheet: styled_sheet.into(),
            banded_rows,
            formats: CellFormats::new(),
        }
    }

    /// Write every sheet, in order, to `output_path`
    pub fn export(&self, sheets: &[SheetOutput], output_path: &Path) -> CarteraResult<()> {
        let mut workbook = Workbook::new();

        for sheet in sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name).map_err(|e| {
                CarteraError::Export(format!(
                    "Failed to set worksheet name {}: {}",
                    sheet.name, e
                ))
            })?;

            if sheet.name == self.styled_sheet {
                self.write_styled_grid(worksheet, &sheet.grid)?;
            } else {
                self.write_grid(worksheet, &sheet.grid, |_, _| false)?;
            }
            info!(
                "Wrote sheet {} ({} rows x {} columns)",
                sheet.name,
                sheet.grid.height(),
                sheet.grid.width()
            );
        }

        workbook
            .save(output_path)
            .map_err(|e| CarteraError::Export(format!("Failed to save Excel file: {}", e)))?;

        Ok(())
    }

    fn write_styled_grid(&self, worksheet: &mut Worksheet, grid: &Grid) -> CarteraResult<()> {
        let band_width = if grid.width() == 0 {
            DEFAULT_BAND_WIDTH
        } else {
            grid.width()
        };
        let is_banded = |row: usize, col: ColumnId| {
            (self.banded_rows.contains(&row) && col.index() < band_width)
                || (row, col) == BANDED_HEADER_CELL
        };

        self.write_grid(worksheet, grid, is_banded)?;

        // Banded cells outside the grid still get their fill
        for &row in &self.banded_rows {
            for col in 0..band_width {
                let col = ColumnId::new(col);
                if grid.get(row, col).is_none() {
                    self.write_cell(worksheet, row, col, &CellValue::Empty, true)?;
                }
            }
        }
        let (row, col) = BANDED_HEADER_CELL;
        if grid.get(row, col).is_none() {
            self.write_cell(worksheet, row, col, &CellValue::Empty, true)?;
        }

        Ok(())
    }

    fn write_grid<F>(
        &self,
        worksheet: &mut Worksheet,
        grid: &Grid,
        is_banded: F,
    ) -> CarteraResult<()>
    where
        F: Fn(usize, ColumnId) -> bool,
    {
        if grid.height() > MAX_ROWS || grid.width() > MAX_COLS {
            return Err(CarteraError::Export(format!(
                "Grid of {} rows x {} columns exceeds worksheet limits",
                grid.height(),
                grid.width()
            )));
        }

        for (row_idx, row) in grid.rows().enumerate() {
            for (col_idx, value) in row.iter().enumerate() {
                let col = ColumnId::new(col_idx);
                self.write_cell(worksheet, row_idx, col, value, is_banded(row_idx, col))?;
            }
        }
        Ok(())
    }

    /// Write one value; blank cells stay truly empty unless they are banded
    fn write_cell(
        &self,
        worksheet: &mut Worksheet,
        row: usize,
        col: ColumnId,
        value: &CellValue,
        banded: bool,
    ) -> CarteraResult<()> {
        if row >= MAX_ROWS || col.index() >= MAX_COLS {
            return Err(CarteraError::Export(format!(
                "Cell {}{} lies outside the worksheet",
                col,
                row + 1
            )));
        }
        let (r, c) = (row as u32, col.index() as u16);
        let band = &self.formats.band;

        let result = match value {
            CellValue::Text(s) => match parse_date_text(s) {
                Some((moment, has_time)) => worksheet.write_datetime_with_format(
                    r,
                    c,
                    &moment,
                    self.formats.for_date(banded, has_time),
                ),
                None if banded => worksheet.write_string_with_format(r, c, s, band),
                None => worksheet.write_string(r, c, s),
            },
            CellValue::Number(n) if n.is_finite() => {
                if banded {
                    worksheet.write_number_with_format(r, c, *n, band)
                } else {
                    worksheet.write_number(r, c, *n)
                }
            }
            other => {
                if let CellValue::Number(n) = other {
                    if n.is_infinite() {
                        warn!("Writing infinite value at {}{} as blank", col, row + 1);
                    }
                }
                if !banded {
                    return Ok(());
                }
                worksheet.write_blank(r, c, band)
            }
        };

        result.map(|_| ()).map_err(|e| {
            CarteraError::Export(format!("Failed to write cell {}{}: {}", col, row + 1, e))
        })
    }
}

/// Recognize the importer's date rendering; the flag is true when a time part is present
fn parse_date_text(text: &str) -> Option<(NaiveDateTime, bool)> {
    if let Ok(moment) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some((moment, true));
    }
    // Exactly YYYY-MM-DD; chrono alone would also accept unpadded fields
    if text.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|moment| (moment, false))
}
