use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),
    #[error("failed to read spreadsheet {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("failed to read sheet {sheet:?} in {path}: {source}")]
    ReadSheet {
        path: PathBuf,
        sheet: String,
        #[source]
        source: calamine::Error,
    },
    #[error("sheet not found: {0}")]
    UnknownSheet(String),
    #[error("failed to write batch file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, SheetError>;
