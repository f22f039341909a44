use crate::error::{CarteraError, CarteraResult};
use std::fmt;
use std::str::FromStr;

//==============================================================================
// Cell Values
//==============================================================================

/// A single untyped cell value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Absent cell
    #[default]
    Empty,
    Text(String),
    Number(f64),
}

static EMPTY: CellValue = CellValue::Empty;

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Absent, NaN, or whitespace-only text. Numeric zero is not blank.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(n) => n.is_nan(),
            CellValue::Text(s) => s.trim().is_empty(),
        }
    }

    /// Absent or NaN only; whitespace-only text counts as a value.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(n) => n.is_nan(),
            CellValue::Text(_) => false,
        }
    }

    /// Numeric coercion: numbers pass through, text is parsed after trimming.
    /// Returns `None` for anything that does not yield a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if !n.is_nan() => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

//==============================================================================
// Column Identifiers
//==============================================================================

/// Positional column identifier rendered in spreadsheet-letter form (A, B, ..., Z, AA, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(usize);

impl ColumnId {
    /// Create from a zero-based column index (0 → A)
    pub const fn new(index: usize) -> Self {
        ColumnId(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    /// 1-based ordinal (A → 1)
    pub const fn ordinal(self) -> usize {
        self.0 + 1
    }

    /// Parse spreadsheet letters, case-insensitively ("O" → index 14)
    pub fn from_letters(letters: &str) -> CarteraResult<Self> {
        let trimmed = letters.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CarteraError::InvalidColumn(letters.to_string()));
        }

        let mut ordinal: usize = 0;
        for ch in trimmed.chars() {
            let digit = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
            ordinal = ordinal
                .checked_mul(26)
                .and_then(|acc| acc.checked_add(digit))
                .ok_or_else(|| CarteraError::InvalidColumn(letters.to_string()))?;
        }

        Ok(ColumnId(ordinal - 1))
    }

    /// Render as spreadsheet letters (0→A, 25→Z, 26→AA, etc.)
    pub fn letters(self) -> String {
        let mut result = String::new();
        let mut num = self.0;

        loop {
            let remainder = num % 26;
            result.insert(0, (b'A' + remainder as u8) as char);
            if num < 26 {
                break;
            }
            num = num / 26 - 1;
        }

        result
    }
}

impl FromStr for ColumnId {
    type Err = CarteraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColumnId::from_letters(s)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}

//==============================================================================
// Grid
//==============================================================================

/// Rectangular table of cell values addressed by 0-based row and [`ColumnId`].
///
/// Every row always has exactly `width` cells, so column identifiers stay
/// contiguous from A after any insertion or removal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    width: usize,
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    /// Grid with `width` columns and no rows
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    /// Grid of `height` x `width` empty cells
    pub fn blank(height: usize, width: usize) -> Self {
        Self {
            width,
            rows: vec![vec![CellValue::Empty; width]; height],
        }
    }

    /// Build from ragged rows; shorter rows are padded to the widest one
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = Self::new(width);
        for row in rows {
            grid.push_row(row);
        }
        grid
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// True when the grid holds no cells at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.width == 0
    }

    pub fn columns(&self) -> impl Iterator<Item = ColumnId> {
        (0..self.width).map(ColumnId::new)
    }

    pub fn column_letters(&self) -> Vec<String> {
        self.columns().map(ColumnId::letters).collect()
    }

    pub fn get(&self, row: usize, col: ColumnId) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col.index()))
    }

    /// Like [`Grid::get`] but out-of-range positions read as empty
    pub fn cell(&self, row: usize, col: ColumnId) -> &CellValue {
        self.get(row, col).unwrap_or(&EMPTY)
    }

    /// Write a value, enlarging the grid when the position lies outside it
    pub fn set(&mut self, row: usize, col: ColumnId, value: impl Into<CellValue>) {
        while self.width <= col.index() {
            self.push_blank_column();
        }
        while self.rows.len() <= row {
            self.rows.push(vec![CellValue::Empty; self.width]);
        }
        self.rows[row][col.index()] = value.into();
    }

    pub fn row(&self, idx: usize) -> Option<&[CellValue]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Values of one column, top to bottom
    pub fn column(&self, col: ColumnId) -> impl Iterator<Item = &CellValue> {
        self.rows.iter().map(move |r| r.get(col.index()).unwrap_or(&EMPTY))
    }

    /// Append a row, padded or truncated to the grid width
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.width, CellValue::Empty);
        self.rows.push(row);
    }

    pub fn push_blank_column(&mut self) {
        self.width += 1;
        for row in &mut self.rows {
            row.push(CellValue::Empty);
        }
    }

    /// Keep only the columns for which `keep` returns true
    pub fn retain_columns<F>(&mut self, mut keep: F)
    where
        F: FnMut(ColumnId) -> bool,
    {
        let mask: Vec<bool> = self.columns().map(&mut keep).collect();
        for row in &mut self.rows {
            let mut flags = mask.iter();
            row.retain(|_| flags.next().copied().unwrap_or(false));
        }
        self.width = mask.iter().filter(|k| **k).count();
    }

    /// Keep only rows for which `keep(index, row)` returns true, re-indexing the rest
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize, &[CellValue]) -> bool,
    {
        let mut idx = 0;
        self.rows.retain(|row| {
            let keep_row = keep(idx, row);
            idx += 1;
            keep_row
        });
    }

    /// Insert `count` blank rows so that the first one lands at index `at`
    pub fn insert_blank_rows(&mut self, at: usize, count: usize) {
        let at = at.min(self.rows.len());
        let blank = vec![CellValue::Empty; self.width];
        self.rows.splice(at..at, std::iter::repeat(blank).take(count));
    }

    /// Remove a row, returning it when it existed
    pub fn remove_row(&mut self, idx: usize) -> Option<Vec<CellValue>> {
        if idx < self.rows.len() {
            Some(self.rows.remove(idx))
        } else {
            None
        }
    }

    /// Mutable access to one column's cells from `start_row` down
    pub fn column_mut_from(
        &mut self,
        col: ColumnId,
        start_row: usize,
    ) -> impl Iterator<Item = &mut CellValue> {
        self.rows
            .iter_mut()
            .skip(start_row)
            .filter_map(move |r| r.get_mut(col.index()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters_roundtrip_edges() {
        assert_eq!(ColumnId::new(0).letters(), "A");
        assert_eq!(ColumnId::new(25).letters(), "Z");
        assert_eq!(ColumnId::new(26).letters(), "AA");
        assert_eq!(ColumnId::new(51).letters(), "AZ");
        assert_eq!(ColumnId::new(52).letters(), "BA");
        assert_eq!(ColumnId::new(702).letters(), "AAA");

        assert_eq!(ColumnId::from_letters("O").unwrap().index(), 14);
        assert_eq!(ColumnId::from_letters("aa").unwrap().index(), 26);
        assert_eq!(ColumnId::from_letters("AAA").unwrap().index(), 702);
    }

    #[test]
    fn test_column_from_letters_rejects_garbage() {
        assert!(ColumnId::from_letters("").is_err());
        assert!(ColumnId::from_letters("A1").is_err());
        assert!(ColumnId::from_letters("É").is_err());
    }

    #[test]
    fn test_blankness_predicate() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Number(f64::NAN).is_blank());
        assert!(CellValue::text("   ").is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
        assert!(!CellValue::text("x").is_blank());

        assert!(!CellValue::text("  ").is_missing());
        assert!(CellValue::Number(f64::NAN).is_missing());
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(CellValue::Number(3.5).as_number(), Some(3.5));
        assert_eq!(CellValue::text(" 12 ").as_number(), Some(12.0));
        assert_eq!(CellValue::text("abc").as_number(), None);
        assert_eq!(CellValue::Empty.as_number(), None);
        assert_eq!(CellValue::Number(f64::NAN).as_number(), None);
    }

    #[test]
    fn test_from_rows_pads_ragged_rows() {
        let grid = Grid::from_rows(vec![
            vec![CellValue::from("a")],
            vec![CellValue::from(1.0), CellValue::from(2.0), CellValue::from(3.0)],
        ]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cell(0, ColumnId::new(2)), &CellValue::Empty);
    }

    #[test]
    fn test_set_enlarges_grid() {
        let mut grid = Grid::new(0);
        grid.set(2, ColumnId::new(2), "3");
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 3);
        assert!(grid.rows().all(|r| r.len() == 3));
    }

    #[test]
    fn test_retain_columns_keeps_rows_aligned() {
        let mut grid = Grid::from_rows(vec![vec![
            CellValue::from("a"),
            CellValue::from("b"),
            CellValue::from("c"),
        ]]);
        grid.retain_columns(|c| c.index() != 1);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.cell(0, ColumnId::new(1)), &CellValue::from("c"));
    }
}
