//! Daycoval: `DD/MM` dates, year from the period header, rows either on one
//! line or split across date/description/amount lines.

use super::columns;
use crate::adapter::{AdapterSpec, AfterClose, ZeroAmountPolicy};
use crate::period::YearRule;
use crate::tokens::{AmountPlacement, DateGrammar, DatePlacement, SignConvention};

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::ShortNumeric],
        date_placement: DatePlacement::LineStart,
        sign: SignConvention::LeadingMinus,
        amount_placement: AmountPlacement::LineEnd,
        year_rule: YearRule::Header {
            pattern: r"\d{2}/\d{2}/(?P<year>\d{4})".to_string(),
        },
        zero_amounts: ZeroAmountPolicy::Drop,
        after_close: AfterClose::KeepDate,
        columns: columns("Data", "Lançamento", "Valor"),
        ..AdapterSpec::new("daycoval", "Daycoval")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::institutions::fixture::{row, rows, scan};
    use crate::types::SkipReason;

    #[test]
    fn test_daycoval_statement() {
        let text = r#"
Extrato de 01/03/2024 a 31/03/2024
04/03 TED RECEBIDA CLIENTE A 5.000,00
05/03
PAGAMENTO FORNECEDOR
- 1.200,00
ESTORNO
0,00
"#;
        let out = scan(spec(), text);
        assert_eq!(
            rows(&out),
            vec![
                row("04/03/2024", "TED RECEBIDA CLIENTE A", "5000.00"),
                row("05/03/2024", "PAGAMENTO FORNECEDOR", "-1200.00"),
            ]
        );
        assert_eq!(out.skipped[0].reason, SkipReason::ZeroAmount);
    }
}
