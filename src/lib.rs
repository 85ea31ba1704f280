//! receipt-tally - totals receipt PDFs by category
//!
//! Every receipt is a PDF whose filename carries the transaction data:
//! `DATE-PAYEE-AMOUNT-DESC-CATEGORY-STORE.pdf`. The crate scans a directory
//! of such files, sums the amounts per category with exact cent arithmetic,
//! and writes a grand-total invoice.
//!
//! # Architecture
//!
//! - `config`: the explicit settings a scan runs from
//! - `error`: custom error types
//! - `models`: `Money` and `Receipt`
//! - `services`: discovery, aggregation and the scan entry point
//! - `reports`: invoice rendering (text and JSON)
//! - `cli`: clap arguments and the command handler
//!
//! # Example
//!
//! ```rust,no_run
//! use receipt_tally::config::ScanConfig;
//! use receipt_tally::services::run_scan;
//!
//! let config = ScanConfig::new("receipts/2025-01", "january.txt", "january");
//! let summary = run_scan(&config)?;
//! println!("{} receipts, total {}", summary.receipt_count, summary.total);
//! # Ok::<(), receipt_tally::TallyError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{TallyError, TallyResult};
