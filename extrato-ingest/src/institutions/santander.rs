//! Santander: date line, description lines, and a closing line with the
//! amount and the running balance. When two six-digit groups are printed the
//! second one is the document number; a lone group stays in the description.

use super::strings;
use crate::adapter::{AdapterSpec, ColumnSchema};
use crate::tokens::AmountPlacement;

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        amount_placement: AmountPlacement::Anywhere,
        document_number: Some(r"\b\d{6}\b.*?\b(\d{6})\b".to_string()),
        exclusion_keywords: strings(&["saldo"]),
        columns: ColumnSchema {
            document_number: Some("Documento".to_string()),
            ..ColumnSchema::default()
        },
        ..AdapterSpec::new("santander", "Santander")
    }
}
