use crate::error::Result;
use crate::source::SpreadsheetSource;
use phonesift_core::domain::{normalize_phone, ContactSet, OutputOrder, Rejection};
use phonesift_core::rules::{partition_batches, Batch, BatchSize, DEFAULT_COLUMNS};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub columns: Vec<usize>,
    pub batch_size: BatchSize,
    pub order: OutputOrder,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.to_vec(),
            batch_size: BatchSize::default(),
            order: OutputOrder::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ColumnReport {
    pub column: usize,
    pub accepted: usize,
    pub header_labels: usize,
    pub too_short: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SheetReport {
    pub name: String,
    pub columns: Vec<ColumnReport>,
}

impl SheetReport {
    pub fn accepted(&self) -> usize {
        self.columns.iter().map(|column| column.accepted).sum()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectReport {
    pub source: String,
    pub sheets: Vec<SheetReport>,
    pub skipped_sheets: Vec<String>,
    pub unique_contacts: usize,
}

#[derive(Debug)]
pub struct Collected {
    pub contacts: ContactSet,
    pub report: CollectReport,
}

#[derive(Debug)]
pub struct Extraction {
    pub batches: Vec<Batch>,
    pub report: CollectReport,
}

/// Reads every sheet once, normalizes the requested columns and merges the
/// accepted phones into one set.
pub fn collect_contacts<S>(source: &mut S, columns: &[usize]) -> Result<Collected>
where
    S: SpreadsheetSource + ?Sized,
{
    let names = source.sheet_names();
    let total = names.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(total);
    let mut contacts = ContactSet::new();
    let mut report = CollectReport {
        source: source.source_name().to_string(),
        ..CollectReport::default()
    };

    for (position, name) in names.into_iter().enumerate() {
        if !seen.insert(name.clone()) {
            warn!(sheet = %name, "duplicate sheet name, skipping");
            report.skipped_sheets.push(name);
            continue;
        }

        info!(sheet = %name, "processing sheet {}/{}", position + 1, total);
        let grid = source.read_sheet(&name)?;
        let mut sheet = SheetReport {
            name,
            columns: Vec::with_capacity(columns.len()),
        };

        for &column in columns {
            let mut counts = ColumnReport {
                column,
                ..ColumnReport::default()
            };
            for cell in grid.column(column) {
                match normalize_phone(cell) {
                    Ok(phone) => {
                        counts.accepted += 1;
                        contacts.insert(phone);
                    }
                    Err(Rejection::HeaderLabel) => counts.header_labels += 1,
                    Err(Rejection::TooShort { .. }) => counts.too_short += 1,
                }
            }
            debug!(
                sheet = %sheet.name,
                column = column + 1,
                accepted = counts.accepted,
                header_labels = counts.header_labels,
                too_short = counts.too_short,
                "column scanned"
            );
            sheet.columns.push(counts);
        }

        report.sheets.push(sheet);
    }

    report.unique_contacts = contacts.len();
    info!(unique = contacts.len(), "contacts collected");
    Ok(Collected { contacts, report })
}

pub fn run<S>(source: &mut S, options: &PipelineOptions) -> Result<Extraction>
where
    S: SpreadsheetSource + ?Sized,
{
    let Collected { contacts, report } = collect_contacts(source, &options.columns)?;
    let ordered = contacts.into_ordered(options.order);
    let batches = partition_batches(ordered, options.batch_size);
    debug!(
        batches = batches.len(),
        batch_size = options.batch_size.get(),
        "contacts partitioned"
    );
    Ok(Extraction { batches, report })
}
