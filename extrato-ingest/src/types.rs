use chrono::NaiveDate;
use extrato_core::Amount;
use serde::Serialize;
use std::fmt;

use crate::error::ScanError;
use crate::period::StatementPeriod;

/// A closed record as it leaves the normalizer (bank-agnostic, not yet tagged
/// with its source document).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementRecord {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Amount,
    pub document_number: Option<String>,
    /// 1-based line that closed the record.
    pub line: usize,
}

/// Why an open record (or a single line) produced nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Token(ScanError),
    /// A new date arrived before any amount closed the record.
    AbandonedByDate,
    /// An amount arrived with nothing accumulated.
    EmptyDescription,
    /// Description matched an exclusion keyword or a noise pattern.
    Excluded(String),
    ZeroAmount,
    /// Input ended while the record was still open.
    Unterminated,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Token(e) => write!(f, "{e}"),
            SkipReason::AbandonedByDate => write!(f, "abandoned by a new date"),
            SkipReason::EmptyDescription => write!(f, "empty description"),
            SkipReason::Excluded(keyword) => write!(f, "excluded by {keyword:?}"),
            SkipReason::ZeroAmount => write!(f, "zero amount"),
            SkipReason::Unterminated => write!(f, "no amount before end of document"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line: usize,
    pub reason: SkipReason,
}

/// Everything one document scan produced.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub records: Vec<StatementRecord>,
    pub skipped: Vec<SkippedRecord>,
    pub period: Option<StatementPeriod>,
}

impl ScanOutcome {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
