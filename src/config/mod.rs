//! Configuration module for receipt-tally
//!
//! Holds the explicit settings value every scan runs from.

pub mod settings;

pub use settings::{OutputFormat, ScanConfig};
