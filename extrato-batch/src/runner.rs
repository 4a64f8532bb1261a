//! Batch runner: one adapter, many documents, one ordered result.
//!
//! Documents are scanned in input order. A document that cannot be read or
//! tagged is recorded as failed and the batch moves on. Progress is a single
//! non-decreasing percentage over the whole batch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use extrato_core::{Transaction, TransactionError};
use extrato_ingest::{scan_lines, DocumentReadError, FormatAdapter, LineSource, ScanOptions};
use thiserror::Error;

use crate::diagnostics::DiagnosticSink;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Read(#[from] DocumentReadError),

    #[error("{document}: {source}")]
    Transaction {
        document: String,
        #[source]
        source: TransactionError,
    },
}

/// Receives the batch percentage, 0..=100.
pub trait ProgressSink {
    fn progress(&mut self, percent: u8);
}

impl<F: FnMut(u8)> ProgressSink for F {
    fn progress(&mut self, percent: u8) {
        self(percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

/// Receives human-readable status lines. Observational only.
pub trait LogSink {
    fn log(&mut self, level: LogLevel, message: &str);
}

impl<F: FnMut(LogLevel, &str)> LogSink for F {
    fn log(&mut self, level: LogLevel, message: &str) {
        self(level, message)
    }
}

/// Shared flag checked between documents.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    Extracted { count: usize, skipped: usize },
    /// Scanned fine, nothing qualified.
    Empty { skipped: usize },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    pub document: String,
    pub outcome: DocumentOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Produced,
    NoDataProduced,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    /// Document order first, then source order within each document.
    pub transactions: Vec<Transaction>,
    pub documents: Vec<DocumentReport>,
    /// Set when the run stopped before the last document.
    pub cancelled: bool,
}

impl BatchReport {
    pub fn status(&self) -> BatchStatus {
        if self.transactions.is_empty() {
            BatchStatus::NoDataProduced
        } else {
            BatchStatus::Produced
        }
    }

    pub fn produced_data(&self) -> bool {
        self.status() == BatchStatus::Produced
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents.iter().filter_map(|d| match &d.outcome {
            DocumentOutcome::Failed { error } => Some((d.document.as_str(), error.as_str())),
            _ => None,
        })
    }
}

pub struct BatchRunner<'a> {
    adapter: &'a FormatAdapter,
    options: ScanOptions,
    cancel: Option<CancelFlag>,
    diagnostics: Option<&'a mut dyn DiagnosticSink>,
}

impl<'a> BatchRunner<'a> {
    pub fn new(adapter: &'a FormatAdapter) -> Self {
        Self {
            adapter,
            options: ScanOptions::default(),
            cancel: None,
            diagnostics: None,
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn with_diagnostics(mut self, sink: &'a mut dyn DiagnosticSink) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    pub fn run<S, P, L>(&mut self, documents: &[S], mut progress: P, mut log: L) -> BatchReport
    where
        S: LineSource,
        P: ProgressSink,
        L: LogSink,
    {
        let total = documents.len();
        let mut report = BatchReport::default();
        let mut last_percent = 0u8;

        tracing::info!(adapter = self.adapter.id(), documents = total, "batch started");
        log.log(
            LogLevel::Info,
            &format!("Processing {total} document(s) with {}", self.adapter.name()),
        );
        progress.progress(0);

        for (i, document) in documents.iter().enumerate() {
            if self.cancel.as_ref().is_some_and(CancelFlag::is_cancelled) {
                report.cancelled = true;
                tracing::info!(processed = i, total, "batch cancelled");
                log.log(
                    LogLevel::Info,
                    &format!("Cancelled after {i} of {total} document(s)"),
                );
                break;
            }

            let id = document.id().to_string();
            log.log(
                LogLevel::Info,
                &format!("Reading {} ({}/{total})", id, i + 1),
            );

            let outcome = match self.process(document) {
                Ok((transactions, skipped)) if transactions.is_empty() => {
                    log.log(LogLevel::Info, &format!("{id}: no transactions found"));
                    DocumentOutcome::Empty { skipped }
                }
                Ok((transactions, skipped)) => {
                    let count = transactions.len();
                    log.log(LogLevel::Info, &format!("{id}: {count} transaction(s)"));
                    report.transactions.extend(transactions);
                    DocumentOutcome::Extracted { count, skipped }
                }
                Err(e) => {
                    tracing::warn!(document = %id, error = %e, "document failed");
                    log.log(LogLevel::Error, &format!("{id}: {e}"));
                    DocumentOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            report.documents.push(DocumentReport {
                document: id,
                outcome,
            });

            let percent = ((i + 1) * 100 / total) as u8;
            if percent > last_percent {
                last_percent = percent;
                progress.progress(percent);
            }
        }

        if last_percent < 100 {
            progress.progress(100);
        }

        tracing::info!(
            transactions = report.transactions.len(),
            failed = report.failures().count(),
            "batch finished"
        );
        match report.status() {
            BatchStatus::Produced => log.log(
                LogLevel::Info,
                &format!("Done: {} transaction(s)", report.transactions.len()),
            ),
            BatchStatus::NoDataProduced => log.log(LogLevel::Info, "Done: no data produced"),
        }

        report
    }

    fn process<S: LineSource>(
        &mut self,
        document: &S,
    ) -> Result<(Vec<Transaction>, usize), BatchError> {
        let id = document.id();
        let lines = document.read_lines()?;

        if let Some(sink) = self.diagnostics.as_deref_mut() {
            if let Err(e) = sink.record_lines(id, &lines) {
                tracing::warn!(document = %id, error = %e, "diagnostic sink failed");
            }
        }

        let outcome = scan_lines(self.adapter, &lines, &self.options);
        let transactions = outcome
            .records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Transaction::new(
                    record.date,
                    &record.description,
                    record.amount,
                    record.document_number,
                    id,
                    index,
                )
                .map_err(|source| BatchError::Transaction {
                    document: id.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            document = %id,
            transactions = transactions.len(),
            skipped = outcome.skipped.len(),
            "document scanned"
        );
        Ok((transactions, outcome.skipped.len()))
    }
}
