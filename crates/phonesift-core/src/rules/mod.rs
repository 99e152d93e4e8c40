pub mod batch;
pub mod columns;

pub use batch::{partition_batches, Batch, BatchSize, DEFAULT_BATCH_SIZE};
pub use columns::{validate_columns, DEFAULT_COLUMNS, MAX_COLUMNS};
