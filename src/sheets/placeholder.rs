use super::SheetProcessor;
use crate::types::{ColumnId, Grid};
use tracing::info;

const PLACEHOLDER_SIZE: usize = 3;

/// Auxiliary sheet without business logic yet: marks A1, B2 and C3
pub struct PlaceholderSheet {
    name: String,
}

impl PlaceholderSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl SheetProcessor for PlaceholderSheet {
    fn sheet_name(&self) -> &str {
        &self.name
    }

    fn process(&self, mut grid: Grid) -> Grid {
        info!("Processing placeholder sheet {}", self.name);
        for i in 0..PLACEHOLDER_SIZE {
            grid.set(i, ColumnId::new(i), (i + 1).to_string());
        }
        grid
    }
}
