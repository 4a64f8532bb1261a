//! extrato-ingest: turns statement text into transaction records.
//!
//! Lines come from a [`LineSource`]; an [`AdapterSpec`] (built in or user
//! supplied) describes one institution's layout; [`scan_lines`] runs the
//! shared state machine over them.

pub mod accumulator;
pub mod adapter;
pub mod error;
pub mod institutions;
pub mod line;
pub mod noise;
pub mod period;
pub mod registry;
pub mod source;
pub mod tokens;
pub mod types;

mod normalize;

pub use accumulator::{scan_lines, scan_text, ScanOptions};
pub use adapter::{
    AdapterSpec, AfterClose, AmountPosition, ColumnSchema, FormatAdapter, OpenRecordDatePolicy,
    Polarity, PolarityMarker, ZeroAmountPolicy,
};
pub use error::{AdapterError, DocumentReadError, ScanError};
pub use line::{group_rows, lines_from_text, Line, PositionedWord};
pub use noise::NoiseClassifier;
pub use period::{StatementPeriod, YearRule};
pub use registry::AdapterRegistry;
pub use source::{LineSource, TextDocument, TextFile, WordsFile};
pub use types::{ScanOutcome, SkipReason, SkippedRecord, StatementRecord};
