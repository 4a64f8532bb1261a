//! Normalized transaction records, the engine's only output type.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::money::Amount;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error("transaction description is empty")]
    EmptyDescription,
    #[error("transaction source document is empty")]
    EmptySourceDocument,
}

/// One statement entry. Fields are read-only once the value exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    date: NaiveDate,
    description: String,
    amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_number: Option<String>,
    source_document: String,
    sequence_index: usize,
}

impl Transaction {
    /// Build a transaction; the description is whitespace-collapsed here.
    pub fn new(
        date: NaiveDate,
        description: &str,
        amount: Amount,
        document_number: Option<String>,
        source_document: impl Into<String>,
        sequence_index: usize,
    ) -> Result<Self, TransactionError> {
        let description = collapse_whitespace(description);
        if description.is_empty() {
            return Err(TransactionError::EmptyDescription);
        }
        let source_document = source_document.into();
        if source_document.trim().is_empty() {
            return Err(TransactionError::EmptySourceDocument);
        }
        let document_number = document_number
            .map(|d| collapse_whitespace(&d))
            .filter(|d| !d.is_empty());

        Ok(Self {
            date,
            description,
            amount,
            document_number,
            source_document,
            sequence_index,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn document_number(&self) -> Option<&str> {
        self.document_number.as_deref()
    }

    pub fn source_document(&self) -> &str {
        &self.source_document
    }

    /// Position among the transactions emitted for the same document.
    pub fn sequence_index(&self) -> usize {
        self.sequence_index
    }

    pub fn is_debit(&self) -> bool {
        self.amount.is_debit()
    }

    pub fn is_credit(&self) -> bool {
        self.amount.is_credit()
    }
}

/// Trim and fold every whitespace run into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_transaction_creation() {
        let txn = Transaction::new(
            day(2024, 3, 5),
            "  PIX   RECEBIDO\tFULANO ",
            Amount::from_cents(15000),
            Some(" 123456 ".to_string()),
            "marco.txt",
            0,
        )
        .unwrap();

        assert_eq!(txn.description(), "PIX RECEBIDO FULANO");
        assert_eq!(txn.document_number(), Some("123456"));
        assert_eq!(txn.amount().to_string(), "150.00");
        assert!(txn.is_credit());
        assert!(!txn.is_debit());
    }

    #[test]
    fn test_empty_description_rejected() {
        let err = Transaction::new(day(2024, 1, 1), " \t ", Amount::from_cents(1), None, "a", 0)
            .unwrap_err();
        assert_eq!(err, TransactionError::EmptyDescription);
    }

    #[test]
    fn test_blank_document_number_dropped() {
        let txn = Transaction::new(
            day(2024, 1, 1),
            "TARIFA",
            Amount::from_cents(-990),
            Some("   ".to_string()),
            "a",
            3,
        )
        .unwrap();
        assert_eq!(txn.document_number(), None);
        assert_eq!(txn.sequence_index(), 3);
        assert!(txn.is_debit());
    }

    #[test]
    fn test_serializes_flat() {
        let txn = Transaction::new(day(2024, 2, 29), "TED", Amount::from_cents(-100), None, "doc", 1)
            .unwrap();
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["date"], "2024-02-29");
        assert_eq!(json["amount"], "-1.00");
        assert_eq!(json["source_document"], "doc");
        assert!(json.get("document_number").is_none());
    }
}
