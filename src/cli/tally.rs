//! CLI arguments for a tally run
//!
//! The three positional arguments (input directory, output file, invoice
//! name) mirror the classic invocation; format and log level are optional.

use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::config::{OutputFormat, ScanConfig};
use crate::error::TallyResult;
use crate::services::{run_scan, ScanSummary};

/// Total receipt PDFs by category using the data in their filenames.
///
/// Every receipt must be named DATE-PAYEE-AMOUNT-DESC-CATEGORY-STORE.pdf,
/// for example 041525-target-29.87-desc-category-store.pdf.
#[derive(Parser, Debug, Clone)]
#[command(name = "receipt-tally", version, about)]
pub struct TallyArgs {
    /// Directory to scan (recursively) for receipt PDFs
    pub input_dir: PathBuf,

    /// File to write the invoice to (overwritten)
    pub output: PathBuf,

    /// Invoice name, printed uppercased as the first line
    pub invoice_name: String,

    /// Output format
    #[arg(long, value_enum, env = "RECEIPT_TALLY_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "RECEIPT_TALLY_LOG_LEVEL", default_value_t = LevelFilter::WARN)]
    pub log_level: LevelFilter,
}

impl TallyArgs {
    /// Turn the parsed arguments into a scan config
    pub fn to_config(&self) -> ScanConfig {
        ScanConfig::new(&self.input_dir, &self.output, &self.invoice_name)
            .with_format(self.format)
    }
}

/// Handle a tally run
pub fn handle_tally(args: &TallyArgs) -> TallyResult<ScanSummary> {
    let summary = run_scan(&args.to_config())?;
    println!("Wrote output to {}", summary.output_path.display());
    Ok(summary)
}
