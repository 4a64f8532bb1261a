//! The line scanner: one forward pass, two states.
//!
//! `Idle` waits for a date. A date opens a record; ordinary text accumulates
//! into its description; an amount closes it and hands the triple to the
//! normalizer. What happens on edge transitions (a date while open, the state
//! after a close, zero amounts) comes from the adapter's policies.

use chrono::NaiveDate;
use extrato_core::Amount;
use tracing::{debug, info};

use crate::adapter::{AfterClose, AmountPosition, FormatAdapter, OpenRecordDatePolicy, Polarity};
use crate::line::{lines_from_text, Line};
use crate::normalize::{normalize, RawRecord};
use crate::period::StatementPeriod;
use crate::types::{ScanOutcome, SkipReason, SkippedRecord};

/// Per-document knobs supplied by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Statement year to use instead of whatever the header says.
    pub year: Option<i32>,
}

#[derive(Debug)]
struct OpenRecord {
    date: NaiveDate,
    description: String,
    /// Line that opened the record.
    line: usize,
    /// Amount read from the date line, for amount-first layouts.
    amount: Option<Amount>,
    /// No more description text is accepted.
    sealed: bool,
}

impl OpenRecord {
    fn new(date: NaiveDate, line: usize) -> Self {
        Self {
            date,
            description: String::new(),
            line,
            amount: None,
            sealed: false,
        }
    }

    fn append(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(text);
    }

    fn has_text(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

struct Scanner<'a> {
    adapter: &'a FormatAdapter,
    year_override: Option<i32>,
    period: Option<StatementPeriod>,
    period_detected: bool,
    in_section: bool,
    polarity: Polarity,
    open: Option<OpenRecord>,
    outcome: ScanOutcome,
}

impl<'a> Scanner<'a> {
    fn new(adapter: &'a FormatAdapter, options: &ScanOptions) -> Self {
        Self {
            adapter,
            year_override: options.year,
            period: options.year.map(StatementPeriod::year),
            period_detected: false,
            in_section: !adapter.has_sections(),
            polarity: Polarity::Credit,
            open: None,
            outcome: ScanOutcome::default(),
        }
    }

    fn feed(&mut self, number: usize, raw: &str) {
        let text = raw.trim();
        if text.is_empty() {
            return;
        }

        // Header lines carrying the period are usually noise too, so this
        // runs first.
        if !self.period_detected && self.adapter.detects_period() {
            if let Some(mut found) = self.adapter.detect_period(text) {
                if let Some(year) = self.year_override {
                    found.year = year;
                }
                debug!(line = number, year = found.year, month = ?found.month, "statement period");
                self.period = Some(found);
                self.period_detected = true;
            }
        }

        if !self.in_section {
            if self.adapter.starts_section(text) {
                self.in_section = true;
            }
            return;
        }

        if let Some(polarity) = self.adapter.polarity_switch(text) {
            self.polarity = polarity;
            return;
        }

        if self.adapter.is_noise(text) {
            return;
        }

        if self.adapter.spec().amount_position == AmountPosition::OnDateLine {
            self.feed_amount_first(number, text);
            return;
        }

        let mut rest = text;
        match self.adapter.recognize_date(text, self.period) {
            Some(Ok(token)) => {
                self.open_at(number, token.date);
                rest = text[token.end..].trim();
            }
            Some(Err(e)) => {
                if let Some(open) = self.open.take() {
                    if open.has_text() {
                        self.skip(number, SkipReason::AbandonedByDate);
                    }
                }
                self.skip(number, SkipReason::Token(e));
                return;
            }
            None => {}
        }

        if rest.is_empty() {
            return;
        }

        match self.adapter.recognize_amount(rest) {
            Some(Ok(token)) => {
                if let Some(mut open) = self.open.take() {
                    open.append(&rest[..token.start]);
                    self.close(number, open, token.amount);
                }
            }
            Some(Err(e)) => self.skip(number, SkipReason::Token(e)),
            None => {
                if let Some(open) = self.open.as_mut() {
                    open.append(rest);
                }
            }
        }
    }

    fn feed_amount_first(&mut self, number: usize, text: &str) {
        match self.adapter.recognize_date(text, self.period) {
            Some(Ok(token)) => {
                self.settle();
                let mut record = OpenRecord::new(token.date, number);
                match self.adapter.recognize_amount(text[token.end..].trim()) {
                    Some(Ok(found)) => record.amount = Some(found.amount),
                    Some(Err(e)) => self.skip(number, SkipReason::Token(e)),
                    None => {}
                }
                self.open = Some(record);
            }
            Some(Err(e)) => {
                self.settle();
                self.skip(number, SkipReason::Token(e));
            }
            None => {
                let Some(open) = self.open.as_mut() else {
                    return;
                };
                if open.sealed {
                    return;
                }
                if self.adapter.recognize_amount(text).is_some() {
                    open.sealed = true;
                } else {
                    open.append(text);
                }
            }
        }
    }

    /// Emit the pending record of an amount-first layout.
    fn settle(&mut self) {
        let Some(open) = self.open.take() else {
            return;
        };
        match open.amount {
            Some(amount) => self.close(open.line, open, amount),
            None if open.has_text() => self.skip(open.line, SkipReason::Unterminated),
            None => {}
        }
    }

    fn open_at(&mut self, number: usize, date: NaiveDate) {
        let next = match self.open.take() {
            Some(mut previous) => match self.adapter.spec().date_in_open_record {
                OpenRecordDatePolicy::KeepDescription => {
                    previous.date = date;
                    previous
                }
                OpenRecordDatePolicy::Discard => {
                    if previous.has_text() {
                        self.skip(number, SkipReason::AbandonedByDate);
                    }
                    OpenRecord::new(date, number)
                }
            },
            None => OpenRecord::new(date, number),
        };
        self.open = Some(next);
    }

    fn close(&mut self, number: usize, open: OpenRecord, amount: Amount) {
        if self.adapter.spec().after_close == AfterClose::KeepDate {
            self.open = Some(OpenRecord::new(open.date, number));
        }

        if !open.has_text() {
            return;
        }

        let raw = RawRecord {
            date: open.date,
            description: &open.description,
            amount,
            polarity: self.polarity,
            line: number,
        };
        match normalize(self.adapter, raw) {
            Ok(record) => self.outcome.records.push(record),
            Err(reason) => self.skip(number, reason),
        }
    }

    fn skip(&mut self, line: usize, reason: SkipReason) {
        debug!(adapter = self.adapter.id(), line, %reason, "record skipped");
        self.outcome.skipped.push(SkippedRecord { line, reason });
    }

    fn finish(mut self, last_line: usize) -> ScanOutcome {
        if self.adapter.spec().amount_position == AmountPosition::OnDateLine {
            self.settle();
        }
        if let Some(open) = self.open.take() {
            if open.has_text() {
                self.skip(last_line, SkipReason::Unterminated);
            }
        }
        self.outcome.period = self.period;
        self.outcome
    }
}

/// Scan one document's lines with `adapter`.
pub fn scan_lines(adapter: &FormatAdapter, lines: &[Line], options: &ScanOptions) -> ScanOutcome {
    let mut scanner = Scanner::new(adapter, options);
    for (i, line) in lines.iter().enumerate() {
        scanner.feed(i + 1, &line.text);
    }
    let outcome = scanner.finish(lines.len());
    info!(
        adapter = adapter.id(),
        records = outcome.records.len(),
        skipped = outcome.skipped.len(),
        "scan finished"
    );
    outcome
}

pub fn scan_text(adapter: &FormatAdapter, text: &str, options: &ScanOptions) -> ScanOutcome {
    scan_lines(adapter, &lines_from_text(text), options)
}
