//! Banco do Brasil: one row per line, `C`/`D` after the amount and a document
//! number in front of it.

use super::strings;
use crate::adapter::{AdapterSpec, ColumnSchema};
use crate::tokens::{AmountPlacement, DateGrammar, DatePlacement, SignConvention};

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::FullNumeric],
        date_placement: DatePlacement::LineStart,
        sign: SignConvention::LetterSuffix,
        amount_placement: AmountPlacement::LineEnd,
        noise: strings(&[
            r"Dt\. balancete",
            r"^Hist[óo]rico$",
            r"Valor R\$",
            r"S A L D O",
            r"Saldo Anterior",
        ]),
        document_number: Some(r"\s(\d{1,3}(?:\.\d{3})+|\d{4,})$".to_string()),
        columns: ColumnSchema {
            date: "Data".to_string(),
            description: "Histórico".to_string(),
            amount: "Valor".to_string(),
            document_number: Some("Documento".to_string()),
            ..ColumnSchema::default()
        },
        ..AdapterSpec::new("banco_do_brasil", "Banco do Brasil")
    }
}
