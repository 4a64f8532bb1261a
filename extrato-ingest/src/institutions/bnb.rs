//! Banco do Nordeste: the day is printed once per group, month and year come
//! from the `Mês:` header, and a trailing `+`/`-` carries the sign. Balance
//! and total lines share that shape, so they are noise.

use super::{columns, strings};
use crate::adapter::{AdapterSpec, AfterClose};
use crate::period::YearRule;
use crate::tokens::{AmountPlacement, DateGrammar, DatePlacement, SignConvention};

pub fn spec() -> AdapterSpec {
    let mut columns = columns("Data", "Histórico", "Valor");
    columns.document_number = Some("Documento".to_string());

    AdapterSpec {
        date_grammars: vec![DateGrammar::DayOnly],
        date_placement: DatePlacement::LineStart,
        sign: SignConvention::TrailingMarker,
        amount_placement: AmountPlacement::LineEnd,
        year_rule: YearRule::Header {
            pattern: r"Mês:\s+(?P<month>\p{L}+)[/\s](?P<year>\d{4})".to_string(),
        },
        document_number: Some(r"\b(\d{4,5})$".to_string()),
        after_close: AfterClose::KeepDate,
        noise: strings(&[
            r"\b(SALDO|TOTAL)\b",
            r"^BANCO DO NORDESTE",
            r"^Conta:",
            r"\bHist[óo]rico\b.*\bValor\b",
            r"\bP[áa]gina\s+\d+",
        ]),
        exclusion_keywords: strings(&["saldo"]),
        columns,
        ..AdapterSpec::new("bnb", "Banco do Nordeste")
    }
}
