//! Custom error types for receipt-tally
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant is fatal: a scan stops at the
//! first error and no output file is written.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::money::MoneyParseError;

/// The expected receipt filename layout, shown in format errors
pub const EXPECTED_SHAPE: &str = "DATE-PAYEE-AMOUNT-DESC-CATEGORY-STORE";

/// A filename that follows [`EXPECTED_SHAPE`]
pub const EXAMPLE_FILE_NAME: &str = "041525-target-29.87-desc-category-store.pdf";

/// The main error type for receipt-tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// A required argument is missing or blank
    #[error("Argument error: {0}")]
    Argument(String),

    /// The input path does not exist or is not a directory
    #[error("{path} directory does not exist")]
    Directory { path: PathBuf },

    /// A receipt filename does not split into six fields
    #[error(
        "Invalid receipt filename '{file_name}': each receipt requires 6 non-empty \
         filename parts split by '-' ({shape}), like:\n{example}",
        shape = EXPECTED_SHAPE,
        example = EXAMPLE_FILE_NAME
    )]
    Format { file_name: String },

    /// The amount field of a receipt is not a decimal number
    #[error("Invalid amount in receipt '{file_name}': {source}")]
    Parse {
        file_name: String,
        #[source]
        source: MoneyParseError,
    },

    /// The report could not be written to disk
    #[error("Failed to write output file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File I/O errors while scanning
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl TallyError {
    /// Create a format error for a filename
    pub fn format(file_name: impl Into<String>) -> Self {
        Self::Format {
            file_name: file_name.into(),
        }
    }

    /// Create a directory error for a path
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::Directory { path: path.into() }
    }

    /// Check if this is a filename format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Check if this is an amount parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<walkdir::Error> for TallyError {
    fn from(err: walkdir::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for receipt-tally operations
pub type TallyResult<T> = Result<T, TallyError>;
