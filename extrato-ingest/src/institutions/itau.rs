//! Itaú: date line (sometimes followed by text), description lines, then the
//! amount alone on its line.

use super::{columns, strings};
use crate::adapter::AdapterSpec;
use crate::tokens::{DateGrammar, DatePlacement};

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::FullNumeric],
        date_placement: DatePlacement::LineStart,
        exclusion_keywords: strings(&["saldo", "sdo anterior", "total", "limite"]),
        columns: columns("Data", "Lançamento", "Valor (R$)"),
        ..AdapterSpec::new("itau", "Itaú")
    }
}
