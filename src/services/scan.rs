//! Scan service
//!
//! Runs a complete scan: discover receipts, aggregate them, render the
//! invoice and write it out. The output file is only touched once every
//! receipt has been parsed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::aggregate::Aggregator;
use super::discovery::find_receipts;
use crate::config::{OutputFormat, ScanConfig};
use crate::error::{TallyError, TallyResult};
use crate::models::Money;
use crate::reports::InvoiceReport;

/// What a finished scan produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    /// Where the invoice was written
    pub output_path: PathBuf,
    /// Number of receipts included
    pub receipt_count: usize,
    /// Number of distinct categories
    pub category_count: usize,
    /// Grand total across every category
    pub total: Money,
}

/// Scan a directory and build the invoice without writing anything
pub fn build_report(config: &ScanConfig) -> TallyResult<InvoiceReport> {
    config.validate()?;

    let names = find_receipts(&config.input_dir)?;
    let aggregator = Aggregator::from_file_names(&names)?;

    InvoiceReport::generate(&config.invoice_name, &aggregator)
}

/// Run a full scan and write the invoice to `config.output_path`
pub fn run_scan(config: &ScanConfig) -> TallyResult<ScanSummary> {
    let report = build_report(config)?;

    write_report(&report, &config.output_path, config.format)?;

    let summary = ScanSummary {
        output_path: config.output_path.clone(),
        receipt_count: report.receipt_count(),
        category_count: report.categories.len(),
        total: report.total,
    };

    info!(
        "Tallied {} receipts in {} categories, total {}",
        summary.receipt_count, summary.category_count, summary.total
    );

    Ok(summary)
}

/// Write a rendered report, replacing any existing file
pub fn write_report(report: &InvoiceReport, path: &Path, format: OutputFormat) -> TallyResult<()> {
    let write_err = |source: std::io::Error| TallyError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Text => writer
            .write_all(report.format_text().as_bytes())
            .map_err(write_err)?,
        OutputFormat::Json => report.export_json(&mut writer)?,
    }

    writer.flush().map_err(write_err)
}
