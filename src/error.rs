//! Error types for PHA reading and writing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhaError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("event block {block}: expected {expected} header fields, got {actual}")]
    HeaderFieldCount {
        block: usize,
        expected: usize,
        actual: usize,
    },

    #[error("event block {block}: pick line {line:?}: expected 4 fields, got {actual}")]
    PickFieldCount {
        block: usize,
        line: String,
        actual: usize,
    },

    #[error("event block {block}: invalid {field} value {value:?}")]
    InvalidField {
        block: usize,
        field: &'static str,
        value: String,
    },

    #[error("timestamp out of range: {0}")]
    TimeOutOfRange(String),

    #[error("invalid event id mapping {original:?} -> {mapped:?}: mapped id must be all digits with at most 9 digits")]
    InvalidIdMapping { original: String, mapped: String },
}

pub type Result<T> = std::result::Result<T, PhaError>;
