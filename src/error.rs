//! Error handling for HURDAT processing operations.
//!
//! Parse failures carry the 1-based line number and the raw line so an
//! upstream data problem can be located without re-running the parse.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HurdatError {
    #[error("No input lines supplied")]
    EmptyInput,

    #[error("Malformed record at line {line}: {reason} - '{content}'")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Unknown status code '{code}' at line {line} - '{content}'")]
    UnknownStatusCode {
        line: usize,
        code: String,
        content: String,
    },

    #[error("Malformed ERSST grid for year {year} at line {line}: {reason}")]
    MalformedGrid {
        year: i32,
        line: usize,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed for {url}: HTTP status {status}")]
    DownloadFailed { url: String, status: u16 },

    #[error("Input file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported output format for {path}: expected .csv or .parquet")]
    UnsupportedOutput { path: PathBuf },

    #[error("Background task failed: {reason}")]
    TaskFailed { reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl HurdatError {
    /// Create a malformed record error for a line
    pub fn malformed(line: usize, content: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Line number of the offending input, for parse errors
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedRecord { line, .. }
            | Self::UnknownStatusCode { line, .. }
            | Self::MalformedGrid { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HurdatError>;
