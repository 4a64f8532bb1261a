//! XP Investimentos: `DD/MM/YYYY history R$ amount R$ balance`, the history
//! sometimes wrapping onto the next line.

use super::{columns, strings};
use crate::adapter::AdapterSpec;
use crate::tokens::{AmountPlacement, DateGrammar, DatePlacement, SignConvention};

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::FullNumeric],
        date_placement: DatePlacement::LineStart,
        sign: SignConvention::LeadingMinus,
        amount_placement: AmountPlacement::Anywhere,
        require_currency_symbol: true,
        exclusion_keywords: strings(&["saldo"]),
        columns: columns("Data", "Histórico", "Valor (R$)"),
        ..AdapterSpec::new("xp", "XP Investimentos")
    }
}
