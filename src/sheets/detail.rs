use super::SheetProcessor;
use crate::config::ReportConfig;
use crate::core::DetailPipeline;
use crate::error::CarteraResult;
use crate::types::Grid;

/// The accounts-receivable detail sheet
pub struct DetailSheet {
    name: String,
    pipeline: DetailPipeline,
}

impl DetailSheet {
    pub fn new(config: &ReportConfig) -> CarteraResult<Self> {
        Ok(Self {
            name: config.target_sheet.clone(),
            pipeline: DetailPipeline::new(config)?,
        })
    }
}

impl SheetProcessor for DetailSheet {
    fn sheet_name(&self) -> &str {
        &self.name
    }

    fn process(&self, grid: Grid) -> Grid {
        self.pipeline.process(grid)
    }
}
