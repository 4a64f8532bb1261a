//! Tabular output of extracted transactions.
//!
//! Columns follow the adapter's [`ColumnSchema`]: date, description, the
//! optional document number, amount, source document.

use std::io::Write;

use anyhow::{Context, Result};
use extrato_core::{MoneyFormat, Transaction};
use extrato_ingest::ColumnSchema;
use serde_json::{Map, Value};

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

pub trait TransactionSink {
    fn write(&mut self, columns: &ColumnSchema, transactions: &[Transaction]) -> Result<()>;
}

/// Cell values of one transaction, in header order.
fn cells(
    columns: &ColumnSchema,
    tx: &Transaction,
    money: &MoneyFormat,
    date_format: &str,
) -> Vec<String> {
    let mut row = vec![
        tx.date().format(date_format).to_string(),
        tx.description().to_string(),
    ];
    if columns.document_number.is_some() {
        row.push(tx.document_number().unwrap_or_default().to_string());
    }
    row.push(tx.amount().format(money));
    row.push(tx.source_document().to_string());
    row
}

pub struct CsvSink<W: Write> {
    writer: W,
    delimiter: u8,
    money: MoneyFormat,
    date_format: String,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            delimiter: b';',
            money: MoneyFormat::brazilian_numeral(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn money_format(mut self, money: MoneyFormat) -> Self {
        self.money = money;
        self
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TransactionSink for CsvSink<W> {
    fn write(&mut self, columns: &ColumnSchema, transactions: &[Transaction]) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(&mut self.writer);

        wtr.write_record(columns.headers())
            .context("Failed to write CSV header")?;
        for tx in transactions {
            wtr.write_record(cells(columns, tx, &self.money, &self.date_format))
                .with_context(|| format!("Failed to write row for {}", tx.source_document()))?;
        }
        wtr.flush().context("Failed to flush CSV output")?;
        Ok(())
    }
}

/// Array of objects keyed by the column headers. Amounts stay strings so no
/// precision is lost.
pub struct JsonSink<W: Write> {
    writer: W,
    money: MoneyFormat,
    date_format: String,
    pretty: bool,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            money: MoneyFormat::default(),
            date_format: "%Y-%m-%d".to_string(),
            pretty: true,
        }
    }

    pub fn money_format(mut self, money: MoneyFormat) -> Self {
        self.money = money;
        self
    }

    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TransactionSink for JsonSink<W> {
    fn write(&mut self, columns: &ColumnSchema, transactions: &[Transaction]) -> Result<()> {
        let headers = columns.headers();
        let rows: Vec<Value> = transactions
            .iter()
            .map(|tx| {
                let object: Map<String, Value> = headers
                    .iter()
                    .zip(cells(columns, tx, &self.money, &self.date_format))
                    .map(|(h, v)| (h.to_string(), Value::String(v)))
                    .collect();
                Value::Object(object)
            })
            .collect();

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &rows)
        } else {
            serde_json::to_writer(&mut self.writer, &rows)
        }
        .context("Failed to write JSON output")?;
        writeln!(self.writer)?;
        self.writer.flush().context("Failed to flush JSON output")?;
        Ok(())
    }
}
