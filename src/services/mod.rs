//! Business logic layer for receipt-tally
//!
//! Discovery finds receipt files, the aggregator folds them into category
//! totals, and the scan service ties both to report output.

pub mod aggregate;
pub mod discovery;
pub mod scan;

pub use aggregate::Aggregator;
pub use discovery::find_receipts;
pub use scan::{build_report, run_scan, write_report, ScanSummary};
