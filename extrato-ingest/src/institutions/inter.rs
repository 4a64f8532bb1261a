//! Banco Inter: positional layout. A day header (`5 de Março de 2024`) is
//! followed by one row per transaction, `history R$ amount R$ balance`.

use super::{columns, strings};
use crate::adapter::{AdapterSpec, AfterClose};
use crate::tokens::{AmountPlacement, DateGrammar, DatePlacement, SignConvention};

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::Extenso],
        date_placement: DatePlacement::LineStart,
        sign: SignConvention::LeadingMinus,
        amount_placement: AmountPlacement::Anywhere,
        require_currency_symbol: true,
        exclusion_keywords: strings(&["saldo"]),
        after_close: AfterClose::KeepDate,
        columns: columns("Data", "Histórico", "Valor"),
        ..AdapterSpec::new("inter", "Banco Inter")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::FormatAdapter;
    use crate::accumulator::{scan_lines, ScanOptions};
    use crate::institutions::fixture::{row, rows, scan};
    use crate::line::{group_rows, PositionedWord};

    #[test]
    fn test_inter_rows() {
        let text = r#"
Extrato Conta Corrente
5 de Março de 2024 Saldo do dia: R$ 1.000,00
Pix recebido: "Cliente A" R$ 300,00 R$ 1.300,00
Pagamento efetuado: "Boleto" -R$ 120,50 R$ 1.179,50
6 de Março de 2024 Saldo do dia: R$ 1.179,50
Compra no debito: "Mercado" -R$ 79,50 R$ 1.100,00
"#;
        let out = scan(spec(), text);
        assert_eq!(
            rows(&out),
            vec![
                row("05/03/2024", r#"Pix recebido: "Cliente A""#, "300.00"),
                row("05/03/2024", r#"Pagamento efetuado: "Boleto""#, "-120.50"),
                row("06/03/2024", r#"Compra no debito: "Mercado""#, "-79.50"),
            ]
        );
    }

    #[test]
    fn test_inter_from_positioned_blocks() {
        let word = |x: f32, y: f32, text: &str| PositionedWord {
            x,
            y,
            text: text.to_string(),
        };
        let words = vec![
            word(420.0, 100.2, "Saldo do dia: R$ 50,00"),
            word(40.0, 100.0, "12 de janeiro de 2024"),
            word(40.0, 120.1, "Pix enviado: \"Loja\""),
            word(300.0, 119.9, "-R$ 10,00"),
            word(420.0, 120.0, "R$ 40,00"),
        ];
        let adapter = FormatAdapter::compile(spec()).unwrap();
        let out = scan_lines(&adapter, &group_rows(&words), &ScanOptions::default());
        assert_eq!(
            rows(&out),
            vec![row("12/01/2024", r#"Pix enviado: "Loja""#, "-10.00")]
        );
    }
}
