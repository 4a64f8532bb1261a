//! Safra: `DD/MM` rows, year from the issue date in the header. Page
//! counters, the bank's own CNPJ and nine-digit references are scrubbed from
//! descriptions.

use super::{columns, strings};
use crate::adapter::AdapterSpec;
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
        noise: strings(&[
            "saldo",
            "limite cheque",
            r"lan[çc]amentos realizados",
            r"data lan[çc]amento complemento",
            "conta corrente",
            "pagamento de bloqueto",
            "aplicacao cdb",
            "safra pay sa",
            "transf entre contas mesmo cpf",
        ]),
        description_scrubbers: strings(&[
            r"\b\d+\s+de\s+\d+\b",
            r"S/A\s*58\.160\.789/0001-28",
            r"\b\d{9}\b",
            r"\S*(?:banco|safra|cnpj|p[áa]gina)\S*",
        ]),
        columns: columns("Data", "Lançamento", "Valor"),
        ..AdapterSpec::new("safra", "Banco Safra")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::institutions::fixture::{row, rows, scan};

    #[test]
    fn test_safra_statement() {
        let text = r#"
Extrato emitido em 02/04/2024
Data Lançamento Complemento Documento Valor
04/03 PIX RECEBIDO CLIENTE A 123456789 1.000,00
05/03 TED ENVIADA BANCO SAFRA S/A 58.160.789/0001-28 -500,00
06/03 TARIFA 1 de 2 -12,00
"#;
        let out = scan(spec(), text);
        assert_eq!(
            rows(&out),
            vec![
                row("04/03/2024", "PIX RECEBIDO CLIENTE A", "1000.00"),
                row("05/03/2024", "TED ENVIADA", "-500.00"),
                row("06/03/2024", "TARIFA", "-12.00"),
            ]
        );
    }
}
