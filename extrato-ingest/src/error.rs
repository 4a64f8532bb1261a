use std::path::PathBuf;

use thiserror::Error;

/// Line-local recognition failures. The scanner drops the offending line or
/// record and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("unrecognized date {0:?}")]
    UnrecognizedDate(String),

    #[error("unrecognized amount {0:?}")]
    UnrecognizedAmount(String),

    #[error("no statement year resolved before short date {0:?}")]
    MissingYearContext(String),

    #[error("unknown month {0:?}")]
    UnknownMonth(String),
}

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("adapter id must not be empty")]
    EmptyId,

    #[error("adapter {0}: at least one date grammar is required")]
    NoDateGrammar(String),

    #[error("adapter {adapter}: invalid {field} pattern {pattern:?}: {source}")]
    Pattern {
        adapter: String,
        field: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("adapter {0}: year pattern needs a named `year` group")]
    YearGroupMissing(String),

    #[error("unknown adapter {0:?}")]
    Unknown(String),
}

/// Raised while turning a source document into lines.
#[derive(Debug, Error)]
pub enum DocumentReadError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{document}: bad layout row {row}: {reason}")]
    Layout {
        document: String,
        row: usize,
        reason: String,
    },

    #[error("{document}: {reason}")]
    Extraction { document: String, reason: String },
}
