//! Whole-workbook processing: import, run every registered sheet, export

use crate::config::ReportConfig;
use crate::error::CarteraResult;
use crate::excel::{ReportExporter, SheetOutput, WorkbookImporter};
use crate::sheets::SheetRegistry;
use crate::types::Grid;
use std::path::Path;
use tracing::info;

/// Transform `input` into the report workbook at `output`
pub fn process_workbook(input: &Path, output: &Path, config: &ReportConfig) -> CarteraResult<()> {
    info!("Processing file: {}", input.display());

    let registry = SheetRegistry::standard(config)?;
    let detail = WorkbookImporter::new(input).extract_detail_grid()?;
    let sheets = run_registry(&registry, &config.target_sheet, detail);

    info!("Writing processed file to: {}", output.display());
    ReportExporter::new(config.target_sheet.clone(), config.banded_rows.clone())
        .export(&sheets, output)?;

    info!("File processed and saved to: {}", output.display());
    Ok(())
}

/// Feed `detail` to the target sheet's processor and an empty grid to every other one
pub fn run_registry(registry: &SheetRegistry, target_sheet: &str, detail: Grid) -> Vec<SheetOutput> {
    let mut detail = Some(detail);
    registry
        .iter()
        .map(|processor| {
            let input = if processor.sheet_name() == target_sheet {
                detail.take().unwrap_or_default()
            } else {
                Grid::default()
            };
            SheetOutput::new(processor.sheet_name(), processor.process(input))
        })
        .collect()
}
