use crate::domain::phone::CanonicalPhone;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

pub const DEFAULT_BATCH_SIZE: usize = 850_000;

/// Maximum number of records per output file. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BatchSize(NonZeroUsize);

impl BatchSize {
    pub fn new(value: usize) -> Result<Self, CoreError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(CoreError::InvalidBatchSize(value))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_BATCH_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for BatchSize {
    type Error = CoreError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BatchSize> for usize {
    fn from(value: BatchSize) -> Self {
        value.get()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Batch {
    /// 1-based position of the batch in the run.
    pub index: usize,
    pub records: Vec<CanonicalPhone>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Splits `phones` into consecutive chunks of at most `size`, keeping order.
pub fn partition_batches(phones: Vec<CanonicalPhone>, size: BatchSize) -> Vec<Batch> {
    let size = size.get();
    let mut batches = Vec::with_capacity(phones.len().div_ceil(size));
    let mut iter = phones.into_iter().peekable();
    while iter.peek().is_some() {
        let index = batches.len() + 1;
        let records: Vec<CanonicalPhone> = iter.by_ref().take(size).collect();
        batches.push(Batch { index, records });
    }
    batches
}
