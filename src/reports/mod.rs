//! Reports module for receipt-tally
//!
//! Turns aggregated receipts into the invoice written to disk.

pub mod invoice;

pub use invoice::{CategorySection, InvoiceLine, InvoiceReport};
