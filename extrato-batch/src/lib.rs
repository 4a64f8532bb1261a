//! extrato-batch: runs the statement engine over many documents and hands the
//! result to tabular sinks.

pub mod diagnostics;
pub mod export;
pub mod runner;

pub use diagnostics::{DiagnosticSink, DumpLinesDir};
pub use export::{CsvSink, JsonSink, TransactionSink};
pub use runner::{
    BatchError, BatchReport, BatchRunner, BatchStatus, CancelFlag, DocumentOutcome,
    DocumentReport, LogLevel, LogSink, ProgressSink,
};
