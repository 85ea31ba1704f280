//! CLI command handlers
//!
//! This module bridges clap argument parsing with the scan service.

pub mod tally;

pub use tally::{handle_tally, TallyArgs};
