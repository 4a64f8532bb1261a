//! PagBank: one block per transaction, date first and the `R$` amount last.

use super::strings;
use crate::adapter::AdapterSpec;
use crate::tokens::{DateGrammar, DatePlacement};

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::FullNumeric],
        date_placement: DatePlacement::LineStart,
        require_currency_symbol: true,
        noise: strings(&["Saldo do dia", "Descrição"]),
        ..AdapterSpec::new("pagbank", "PagBank")
    }
}
