use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid batch size: {0} (must be at least 1)")]
    InvalidBatchSize(usize),
    #[error("at least one column is required")]
    EmptyColumns,
    #[error("duplicate column index: {0}")]
    DuplicateColumn(usize),
    #[error("column index out of range: {0}")]
    ColumnOutOfRange(usize),
}
