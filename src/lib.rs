//! Cartera - San Benito accounts-receivable report formatter
//!
//! This library rewrites a raw accounts-receivable detail sheet into the fixed
//! report layout used downstream: pruned columns, cleared label artifacts,
//! recomputed grand totals and normalized row positions.
//!
//! # Features
//!
//! - Positional detail pipeline (column pruning, label shift, keyword clearing,
//!   row filtering, totals, overdue percentage, customer fill-down)
//! - Ordered sheet registry with placeholder auxiliary sheets
//! - Excel import (merged-cell flattening) and styled export
//! - YAML configuration overrides
//!
//! # Example
//!
//! ```no_run
//! use cartera_format::config::ReportConfig;
//! use cartera_format::core::DetailPipeline;
//! use cartera_format::excel::WorkbookImporter;
//!
//! let config = ReportConfig::default();
//! let raw = WorkbookImporter::new("cartera.xlsx").extract_detail_grid()?;
//! let report = DetailPipeline::new(&config)?.process(raw);
//!
//! println!("Rows: {}", report.height());
//! # Ok::<(), cartera_format::error::CarteraError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod sheets;
pub mod types;
pub mod workbook;

// Re-export commonly used types
pub use config::ReportConfig;
pub use error::{CarteraError, CarteraResult};
pub use types::{CellValue, ColumnId, Grid};
pub use workbook::process_workbook;
