pub mod error;
pub mod pipeline;
pub mod source;
pub mod writer;
pub mod xlsx;

pub use error::{Result, SheetError};
pub use pipeline::{
    collect_contacts, run, Collected, CollectReport, ColumnReport, Extraction, PipelineOptions,
    SheetReport,
};
pub use source::{MemorySource, SheetGrid, SpreadsheetSource};
pub use writer::{BatchWriter, WrittenBatch};
pub use xlsx::XlsxSource;
