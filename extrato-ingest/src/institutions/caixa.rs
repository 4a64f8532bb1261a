//! Caixa: `DD/MM/YYYY NNNNNN history 1.234,56 C 9.999,99 C`; the six-digit
//! document number opens the description and the balance trails the amount.

use super::strings;
use crate::adapter::{AdapterSpec, ColumnSchema};
use crate::tokens::{AmountPlacement, DateGrammar, DatePlacement, SignConvention};

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::FullNumeric],
        date_placement: DatePlacement::LineStart,
        sign: SignConvention::LetterSuffix,
        amount_placement: AmountPlacement::Anywhere,
        document_number: Some(r"^(\d{6})\b".to_string()),
        exclusion_keywords: strings(&["saldo"]),
        columns: ColumnSchema {
            date: "Data Mov.".to_string(),
            description: "Histórico".to_string(),
            amount: "Valor".to_string(),
            document_number: Some("Nr. Doc.".to_string()),
            ..ColumnSchema::default()
        },
        ..AdapterSpec::new("caixa", "Caixa Econômica Federal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::institutions::fixture::{row, rows, scan};

    #[test]
    fn test_caixa_statement() {
        let text = r#"
Data Mov. Nr. Doc. Histórico Valor Saldo
01/03/2024 000000 SALDO ANTERIOR 0,00 C 1.000,00 C
04/03/2024 041530 CRED PIX 1.250,00 C 2.250,00 C
05/03/2024 051200 DEB TARIFA 32,00 D 2.218,00 C
"#;
        let out = scan(spec(), text);
        assert_eq!(
            rows(&out),
            vec![
                row("04/03/2024", "CRED PIX", "1250.00"),
                row("05/03/2024", "DEB TARIFA", "-32.00"),
            ]
        );
        assert_eq!(out.records[0].document_number.as_deref(), Some("041530"));
    }
}
