//! Asaas: `DD/MM/YYYY description ... R$ -1.234,56`, the description may wrap.

use super::{columns, strings};
use crate::adapter::AdapterSpec;
use crate::tokens::{AmountPlacement, DateGrammar, DatePlacement, SignConvention};

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::FullNumeric],
        date_placement: DatePlacement::LineStart,
        sign: SignConvention::LeadingMinus,
        amount_placement: AmountPlacement::LineEnd,
        require_currency_symbol: true,
        exclusion_keywords: strings(&["saldo"]),
        columns: columns("Data", "Histórico", "Valor"),
        ..AdapterSpec::new("asaas", "Asaas")
    }
}
