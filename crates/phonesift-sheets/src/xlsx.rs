use crate::error::{Result, SheetError};
use crate::source::{SheetGrid, SpreadsheetSource};
use calamine::{open_workbook_auto, Data, Reader, Sheets};
use phonesift_core::domain::CellValue;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Workbook on disk, read through calamine (`.xlsx`, `.xlsm`, `.xls`, `.ods`).
pub struct XlsxSource {
    path: PathBuf,
    name: String,
    workbook: Sheets<BufReader<File>>,
}

impl XlsxSource {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SheetError::MissingInput(path.to_path_buf()));
        }

        let workbook = open_workbook_auto(path).map_err(|source| SheetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "workbook opened");

        Ok(Self {
            path: path.to_path_buf(),
            name: path.display().to_string(),
            workbook,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SpreadsheetSource for XlsxSource {
    fn source_name(&self) -> &str {
        &self.name
    }

    fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    fn read_sheet(&mut self, name: &str) -> Result<SheetGrid> {
        let range = self
            .workbook
            .worksheet_range(name)
            .map_err(|source| SheetError::ReadSheet {
                path: self.path.clone(),
                sheet: name.to_string(),
                source,
            })?;

        let first_column = range.start().map(|(_, col)| col as usize).unwrap_or(0);
        let rows = range
            .rows()
            .map(|row| row.iter().map(cell_value).collect())
            .collect();

        Ok(SheetGrid::new(name, rows).with_first_column(first_column))
    }
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(value) | Data::DateTimeIso(value) | Data::DurationIso(value) => {
            CellValue::Text(value.clone())
        }
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(value) => CellValue::Float(value.as_f64()),
    }
}
