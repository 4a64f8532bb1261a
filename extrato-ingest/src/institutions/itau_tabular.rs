//! Itaú, tabular layout: one entry per line under the `Data Lançamentos
//! Valor` header, the amount first and the running balance after it.

use super::{columns, strings};
use crate::adapter::AdapterSpec;
use crate::tokens::{AmountPlacement, DateGrammar, DatePlacement};

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::FullNumeric],
        date_placement: DatePlacement::LineStart,
        amount_placement: AmountPlacement::Anywhere,
        section_start: strings(&[r"^data\s+lan[çc]amentos\b.*\bvalor"]),
        exclusion_keywords: strings(&["saldo"]),
        columns: columns("Data", "Lançamento", "Valor (R$)"),
        ..AdapterSpec::new("itau_tabular", "Itaú (tabela)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::institutions::fixture::{row, rows, scan};
    use crate::types::SkipReason;

    #[test]
    fn test_itau_tabular_statement() {
        let text = r#"
Extrato conta corrente
01/03/2024 a 31/03/2024
Data Lançamentos Valor (R$) Saldo (R$)
01/03/2024 SALDO ANTERIOR 2.000,00
04/03/2024 PIX TRANSF FULANO -150,00 1.850,00
05/03/2024 RENDIMENTOS 3,21 1.853,21
"#;
        let out = scan(spec(), text);
        assert_eq!(
            rows(&out),
            vec![
                row("04/03/2024", "PIX TRANSF FULANO", "-150.00"),
                row("05/03/2024", "RENDIMENTOS", "3.21"),
            ]
        );
        assert_eq!(out.skipped.len(), 1);
        assert!(matches!(out.skipped[0].reason, SkipReason::Excluded(_)));
    }
}
