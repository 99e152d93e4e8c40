use crate::error::{Result, SheetError};
use phonesift_core::domain::CellValue;

/// Anything that can hand out the sheets of a workbook as header-less grids.
pub trait SpreadsheetSource {
    fn source_name(&self) -> &str;
    /// Sheet names in workbook order. May repeat if the reader misbehaves.
    fn sheet_names(&self) -> Vec<String>;
    fn read_sheet(&mut self, name: &str) -> Result<SheetGrid>;
}

/// One sheet's used range. Row 0 is data; nothing is treated as a header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    pub name: String,
    /// Absolute index of the column stored at position 0 of every row.
    pub first_column: usize,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            first_column: 0,
            rows,
        }
    }

    pub fn with_first_column(mut self, first_column: usize) -> Self {
        self.first_column = first_column;
        self
    }

    /// Non-empty cells of the absolute column `index`, top to bottom.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &CellValue> + '_ {
        let offset = index.checked_sub(self.first_column);
        self.rows
            .iter()
            .filter_map(move |row| offset.and_then(|offset| row.get(offset)))
            .filter(|cell| !cell.is_empty())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    sheets: Vec<SheetGrid>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sheets: Vec::new(),
        }
    }

    pub fn with_sheet(mut self, sheet: SheetGrid) -> Self {
        self.sheets.push(sheet);
        self
    }
}

impl SpreadsheetSource for MemorySource {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|sheet| sheet.name.clone()).collect()
    }

    fn read_sheet(&mut self, name: &str) -> Result<SheetGrid> {
        self.sheets
            .iter()
            .find(|sheet| sheet.name == name)
            .cloned()
            .ok_or_else(|| SheetError::UnknownSheet(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{MemorySource, SheetGrid, SpreadsheetSource};
    use crate::error::SheetError;
    use phonesift_core::domain::CellValue;

    fn text(value: &str) -> CellValue {
        CellValue::from(value)
    }

    #[test]
    fn column_skips_empty_and_short_rows() {
        let grid = SheetGrid::new(
            "Plan1",
            vec![
                vec![text("a0"), text("b0")],
                vec![text("a1")],
                vec![CellValue::Empty, text("b2")],
            ],
        );
        let col_a: Vec<_> = grid.column(0).collect();
        let col_b: Vec<_> = grid.column(1).collect();
        assert_eq!(col_a, [&text("a0"), &text("a1")]);
        assert_eq!(col_b, [&text("b0"), &text("b2")]);
        assert_eq!(grid.column(7).count(), 0);
    }

    #[test]
    fn column_uses_absolute_positions() {
        let grid = SheetGrid::new("Plan1", vec![vec![text("c0"), text("d0")]]).with_first_column(2);
        assert_eq!(grid.column(0).count(), 0);
        assert_eq!(grid.column(2).collect::<Vec<_>>(), [&text("c0")]);
        assert_eq!(grid.column(3).collect::<Vec<_>>(), [&text("d0")]);
    }

    #[test]
    fn memory_source_reports_unknown_sheets() {
        let mut source = MemorySource::new("memory").with_sheet(SheetGrid::new("Plan1", vec![]));
        assert_eq!(source.sheet_names(), ["Plan1"]);
        let err = source.read_sheet("Plan9").unwrap_err();
        assert!(matches!(err, SheetError::UnknownSheet(name) if name == "Plan9"));
    }
}
