//! Core data models for receipt-tally
//!
//! This module contains the data structures that represent the receipt
//! domain: exact money amounts and receipts parsed from filenames.

pub mod money;
pub mod receipt;

pub use money::{Money, MoneyParseError};
pub use receipt::Receipt;
