//! Keyword clearing: blanks stray report labels left inside the data region

use super::text::normalize_text;
use crate::types::{CellValue, Grid};
use std::collections::HashSet;

/// Normalized label keywords, built once from configuration
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    normalized: HashSet<String>,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            normalized: keywords
                .into_iter()
                .map(|k| normalize_text(k.as_ref()))
                .collect(),
        }
    }

    /// Exact match after normalizing `text`
    pub fn matches(&self, text: &str) -> bool {
        self.normalized.contains(&normalize_text(text))
    }

    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Blank every text cell matching `keywords`, except inside `protected_row`.
/// Numbers are never cleared.
pub fn clear(mut grid: Grid, keywords: &KeywordSet, protected_row: usize) -> Grid {
    if grid.is_empty() {
        return grid;
    }

    for col in grid.columns().collect::<Vec<_>>() {
        for (row_idx, cell) in grid.column_mut_from(col, 0).enumerate() {
            if row_idx == protected_row {
                continue;
            }
            let is_label = cell.as_text().is_some_and(|text| keywords.matches(text));
            if is_label {
                *cell = CellValue::Empty;
            }
        }
    }

    grid
}
