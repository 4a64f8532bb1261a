//! Itaú, older running-text layout: `dd / mon` dates, the year from a month
//! name printed in the header, entries only after `lançamentos período`.

use super::{columns, strings};
use crate::adapter::{AdapterSpec, AfterClose};
use crate::period::YearRule;
use crate::tokens::{AmountPlacement, DateGrammar, DatePlacement};

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::ShortMonthAbbrev],
        date_placement: DatePlacement::LineStart,
        amount_placement: AmountPlacement::LineEnd,
        section_start: strings(&[r"lan[çc]amentos\s+per[íi]odo"]),
        year_rule: YearRule::Header {
            pattern: r"\b(?:jan|fev|mar|abr|mai|jun|jul|ago|set|out|nov|dez)\p{L}*\.?\s*(?:/|de)?\s*(?P<year>20\d{2})\b"
                .to_string(),
        },
        noise: strings(&[r"\b(SALDO|SDO)\b"]),
        exclusion_keywords: strings(&["saldo"]),
        after_close: AfterClose::KeepDate,
        columns: columns("Data", "Lançamento", "Valor (R$)"),
        ..AdapterSpec::new("itau_texto", "Itaú (texto)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::institutions::fixture::{row, rows, scan};

    #[test]
    fn test_itau_texto_statement() {
        let text = r#"
agência 0001 conta 12345-6 março 2024
lançamentos período: 01/03/2024 a 31/03/2024
01 / mar SALDO ANTERIOR 1.000,00
04 / mar PIX TRANSF FULANO -150,00
TAR PACOTE ITAU -42,50
05 / mar RENDIMENTO POUPANCA 3,21
SDO CTA/APL AUTOMATICAS 1.110,71
"#;
        let out = scan(spec(), text);
        assert_eq!(
            rows(&out),
            vec![
                row("04/03/2024", "PIX TRANSF FULANO", "-150.00"),
                row("04/03/2024", "TAR PACOTE ITAU", "-42.50"),
                row("05/03/2024", "RENDIMENTO POUPANCA", "3.21"),
            ]
        );
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn test_itau_texto_ignores_lines_before_section() {
        let text = "março 2024\n04 / mar PIX ANTES -1,00\nlançamentos período\n05 / mar PIX -2,00\n";
        let out = scan(spec(), text);
        assert_eq!(rows(&out), vec![row("05/03/2024", "PIX", "-2.00")]);
    }
}
