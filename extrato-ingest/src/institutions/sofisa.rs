//! Sofisa Direto: `DD/MM/YY` rows; the amount may sit on a continuation line.

use super::{columns, strings};
use crate::adapter::AdapterSpec;
use crate::tokens::{AmountPlacement, DateGrammar, DatePlacement};

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::TwoDigitYear],
        date_placement: DatePlacement::LineStart,
        amount_placement: AmountPlacement::Anywhere,
        noise: strings(&[
            r"^Saldo dispon[íi]vel em \d{2}/\d{2}/\d{2}",
            "Atualizado em",
            r"Extrato por per[íi]odo",
            r"Entradas/Sa[íi]das",
            "Saldo em conta",
            "Valor Bloqueado",
            r"Cheque F[áa]cil",
            "Saldo Bloqueado",
            "Cliente :",
            r"Ag[êe]ncia:",
            "Conta:",
            r"https?://",
            r"^\d{2}/\d{2}/\d{4}$",
            r"^\d{2}/\d{2}/\d{4},\s*\d{2}:\d{2}",
        ]),
        columns: columns("Data", "Lançamentos", "Valor (R$)"),
        ..AdapterSpec::new("sofisa", "Sofisa Direto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::institutions::fixture::{row, rows, scan};

    #[test]
    fn test_sofisa_statement() {
        let text = r#"
Extrato por período
Cliente : EMPRESA X
04/03/24 TED RECEBIDA
EMPRESA Y LTDA 10.000,00
05/03/24 PAGAMENTO PIX -2.345,67
https://www.sofisadireto.com.br
"#;
        let out = scan(spec(), text);
        assert_eq!(
            rows(&out),
            vec![
                row("04/03/2024", "TED RECEBIDA EMPRESA Y LTDA", "10000.00"),
                row("05/03/2024", "PAGAMENTO PIX", "-2345.67"),
            ]
        );
    }
}
