//! Error types for loading and parsing a device table.
//!
//! Only a missing or unreadable table is an error. Bad values inside rows are
//! dropped by the aggregators and never surface here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("source table has no header row")]
    MissingHeader,

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid API key: {0}")]
    InvalidApiKey(String),

    #[error("invalid source URL: {0}")]
    InvalidUrl(String),

    #[error("source is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("invalid column map: {0}")]
    ColumnMap(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
