//! Shared fixture: a small raw detail sheet in the layout the ERP exports
//!
//! 10 rows x 26 columns (A..Z). Row 4 carries the column labels, row 3 and 5
//! the customer headings, rows 6..9 one invoice each.

#![allow(dead_code)]

use cartera_format::{CellValue, ColumnId, Grid};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

pub const RAW_WIDTH: usize = 26;
pub const RAW_HEIGHT: usize = 10;

// Raw (pre-prune) column indices
pub const RAW_FOLIO: usize = 6; // G, becomes D
pub const RAW_SALDO: usize = 13; // N, becomes G
pub const RAW_NOT_DUE: usize = 15; // P, becomes H
pub const RAW_OVERDUE: usize = 17; // R, becomes J
pub const RAW_PRUNED_AMOUNT: usize = 14; // O, removed

/// (folio, saldo, no vencido, vencido)
pub const INVOICES: [(&str, f64, f64, f64); 4] = [
    ("F-001", 1000.0, 750.0, 250.0),
    ("F-002", 2500.0, 1750.0, 750.0),
    ("F-003", 400.0, 400.0, 0.0),
    ("F-004", 100.0, 100.0, 0.0),
];

pub const TOTAL_SALDO: f64 = 4000.0;
pub const TOTAL_NOT_DUE: f64 = 3000.0;
pub const TOTAL_OVERDUE: f64 = 1000.0;

fn header_label(col: usize) -> String {
    match col {
        0 => "Fecha".to_string(),
        RAW_FOLIO => "Folio".to_string(),
        RAW_SALDO => "Saldo".to_string(),
        RAW_NOT_DUE => "No vencido".to_string(),
        16 => "30 días".to_string(),
        RAW_OVERDUE => "Vencido".to_string(),
        18 => "60 días".to_string(),
        19 => "90 días".to_string(),
        20 => "120 días".to_string(),
        21 => "Más de 120 días".to_string(),
        other => format!("Columna {}", ColumnId::new(other).letters()),
    }
}

pub fn raw_detail_rows() -> Vec<Vec<CellValue>> {
    let mut rows = vec![vec![CellValue::Empty; RAW_WIDTH]; RAW_HEIGHT];

    rows[0][0] = CellValue::from("FERRETERIA Y MADERERIA SAN BENITO SA DE CV");
    rows[1][0] = CellValue::from("Antiguedad de saldos");
    rows[2][0] = CellValue::from("Al 30/09/2026");
    rows[3][0] = CellValue::from("ACME SA");
    for (col, cell) in rows[4].iter_mut().enumerate() {
        *cell = CellValue::Text(header_label(col));
    }
    rows[5][0] = CellValue::from("BETA SC");

    for (i, (folio, saldo, not_due, overdue)) in INVOICES.iter().enumerate() {
        let row = &mut rows[6 + i];
        row[RAW_FOLIO] = CellValue::from(*folio);
        row[RAW_SALDO] = CellValue::Number(*saldo);
        row[RAW_NOT_DUE] = CellValue::Number(*not_due);
        row[RAW_OVERDUE] = CellValue::Number(*overdue);
        row[RAW_PRUNED_AMOUNT] = CellValue::Number(99_999.0);
        row[25] = CellValue::Number(-1.0);
    }
    rows
}

pub fn raw_detail_grid() -> Grid {
    Grid::from_rows(raw_detail_rows())
}

/// Write `rows` as the only sheet of a new workbook at `path`
pub fn write_raw_workbook(path: &Path, rows: &[Vec<CellValue>]) {
    write_raw_workbook_with(path, rows, |_| {});
}

/// Like [`write_raw_workbook`], letting `extra` add cells after the rows
pub fn write_raw_workbook_with<F>(path: &Path, rows: &[Vec<CellValue>], extra: F)
where
    F: FnOnce(&mut Worksheet),
{
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Detalle").unwrap();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            match value {
                CellValue::Text(s) => {
                    worksheet.write_string(r as u32, c as u16, s).unwrap();
                }
                CellValue::Number(n) => {
                    worksheet.write_number(r as u32, c as u16, *n).unwrap();
                }
                CellValue::Empty => {}
            }
        }
    }
    extra(worksheet);
    workbook.save(path).unwrap();
}
