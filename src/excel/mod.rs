//! Workbook adapter
//!
//! - Import: source .xlsx → raw detail [`Grid`](crate::types::Grid) (calamine)
//! - Export: processed grids → styled .xlsx (rust_xlsxwriter)

mod exporter;
mod importer;

pub use exporter::{ReportExporter, SheetOutput};
pub use importer::{
    data_to_cell, drop_empty_columns, flatten_merged_regions, MergedRegion, WorkbookImporter,
};
