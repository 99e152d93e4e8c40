use crate::error::{Result, SheetError};
use phonesift_core::rules::Batch;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const BATCH_EXTENSION: &str = "csv";

const BATCH_SUFFIX: &str = "_parte_";
// Lets spreadsheet tools detect UTF-8 when opening the CSV.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Serialize)]
pub struct WrittenBatch {
    pub index: usize,
    pub path: PathBuf,
    pub records: usize,
}

/// Writes batches as `<prefix>_parte_<N>.csv`, one phone per line, no header.
#[derive(Debug, Clone)]
pub struct BatchWriter {
    prefix: PathBuf,
}

impl BatchWriter {
    pub fn new(prefix: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        let mut name = self.prefix.clone().into_os_string();
        name.push(format!("{BATCH_SUFFIX}{index}.{BATCH_EXTENSION}"));
        PathBuf::from(name)
    }

    pub fn write(&self, batch: &Batch) -> Result<WrittenBatch> {
        let path = self.path_for(batch.index);
        write_batch_file(&path, batch).map_err(|source| SheetError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), records = batch.len(), "batch written");

        Ok(WrittenBatch {
            index: batch.index,
            path,
            records: batch.len(),
        })
    }

    /// Stops at the first failure. Files already written are left in place.
    pub fn write_all(&self, batches: &[Batch]) -> Result<Vec<WrittenBatch>> {
        batches.iter().map(|batch| self.write(batch)).collect()
    }
}

fn write_batch_file(path: &Path, batch: &Batch) -> std::result::Result<(), csv::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);
    for phone in &batch.records {
        writer.write_record([phone.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
