//! Scan settings for receipt-tally
//!
//! A `ScanConfig` carries everything a run needs: where to look for
//! receipts, where to write the invoice, what to call it and which format
//! to write. It is built once from the command line and passed explicitly.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text invoice (default)
    #[default]
    Text,
    /// Pretty-printed JSON of the same data
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Settings for a single scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory searched (recursively) for receipt PDFs
    pub input_dir: PathBuf,

    /// File the invoice is written to, overwritten if present
    pub output_path: PathBuf,

    /// Free-text invoice name, echoed uppercased as the first line
    pub invoice_name: String,

    /// Output file format
    #[serde(default)]
    pub format: OutputFormat,
}

impl ScanConfig {
    /// Create a config with the default text format
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        invoice_name: impl Into<String>,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            invoice_name: invoice_name.into(),
            format: OutputFormat::default(),
        }
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Check that every argument is present and the input is a directory
    pub fn validate(&self) -> TallyResult<()> {
        if self.input_dir.as_os_str().is_empty() {
            return Err(TallyError::Argument("input directory is required".into()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(TallyError::Argument("output path is required".into()));
        }
        if self.invoice_name.trim().is_empty() {
            return Err(TallyError::Argument("invoice name is required".into()));
        }
        if !self.input_dir.is_dir() {
            return Err(TallyError::directory(&self.input_dir));
        }
        Ok(())
    }
}
