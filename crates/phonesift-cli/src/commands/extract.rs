use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use phonesift_config::Overrides;
use phonesift_core::domain::OutputOrder;
use phonesift_sheets::pipeline::{self, CollectReport, PipelineOptions};
use phonesift_sheets::{BatchWriter, WrittenBatch, XlsxSource};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Spreadsheet to read (.xlsx, .xlsm, .xls or .ods)
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output path prefix; files are named <prefix>_parte_<N>.csv
    #[arg(long)]
    pub out_prefix: Option<PathBuf>,
    /// Maximum number of phones per output file
    #[arg(long)]
    pub batch_size: Option<usize>,
    /// Zero-based column indexes to scan, comma separated
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<usize>>,
    /// Sort phones before splitting so output is reproducible
    #[arg(long)]
    pub sorted: bool,
}

impl ExtractArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            input_path: self.input.clone(),
            output_prefix: self.out_prefix.clone(),
            batch_size: self.batch_size,
            columns: self.columns.clone(),
            order: self.sorted.then_some(OutputOrder::Sorted),
        }
    }
}

#[derive(Debug, Serialize)]
struct ExtractReport<'a> {
    #[serde(flatten)]
    collected: &'a CollectReport,
    batches: &'a [WrittenBatch],
}

pub fn extract(ctx: &Context<'_>) -> Result<()> {
    let config = ctx.config;
    let input = config.input_path.as_deref().ok_or_else(|| {
        invalid_input("no input spreadsheet: pass --input or set `input` in the config file")
    })?;

    let mut source = XlsxSource::open(input)?;
    let options = PipelineOptions {
        columns: config.columns.clone(),
        batch_size: config.batch_size,
        order: config.order,
    };
    let extraction = pipeline::run(&mut source, &options)?;
    let report = extraction.report;

    if !ctx.json {
        print_collect_report(&report);
    }

    let writer = BatchWriter::new(&config.output_prefix);
    let mut written = Vec::with_capacity(extraction.batches.len());
    for batch in &extraction.batches {
        let saved = writer.write(batch)?;
        if !ctx.json {
            println!("Saved '{}' ({} records)", saved.path.display(), saved.records);
        }
        written.push(saved);
    }
    debug!(files = written.len(), "extraction finished");

    if ctx.json {
        return print_json(&ExtractReport {
            collected: &report,
            batches: &written,
        });
    }

    println!("Done: {} file(s) written.", written.len());
    Ok(())
}

fn print_collect_report(report: &CollectReport) {
    let total = report.sheets.len() + report.skipped_sheets.len();
    for (position, sheet) in report.sheets.iter().enumerate() {
        println!("Sheet {}/{}: '{}'", position + 1, total, sheet.name);
        for column in &sheet.columns {
            println!("  column {}: +{} phones", column.column + 1, column.accepted);
        }
    }
    for name in &report.skipped_sheets {
        println!("Skipped duplicate sheet '{}'", name);
    }
    println!("Unique phones found: {}", report.unique_contacts);
}
