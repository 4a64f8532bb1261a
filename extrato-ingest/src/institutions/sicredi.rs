//! Sicredi: date, description, document and amount each on their own line,
//! followed by the balance.

use super::{columns, strings};
use crate::adapter::AdapterSpec;

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        noise: strings(&[
            r"^(DATA|DESCRI[ÇC][ÃA]O|DOCUMENTO|VALOR \(R\$\)|SALDO \(R\$\)|SALDO ANTERIOR)$",
        ]),
        columns: columns("DATA", "DESCRIÇÃO", "VALOR"),
        ..AdapterSpec::new("sicredi", "Sicredi")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::institutions::fixture::{row, rows, scan};

    #[test]
    fn test_sicredi_statement() {
        let text = r#"
DATA
DESCRIÇÃO
DOCUMENTO
VALOR (R$)
SALDO (R$)
SALDO ANTERIOR
1.000,00
04/03/2024
RECEBIMENTO PIX
CX123456
200,00
1.200,00
05/03/2024
PAGAMENTO BOLETO
-80,00
1.120,00
"#;
        let out = scan(spec(), text);
        assert_eq!(
            rows(&out),
            vec![
                row("04/03/2024", "RECEBIMENTO PIX CX123456", "200.00"),
                row("05/03/2024", "PAGAMENTO BOLETO", "-80.00"),
            ]
        );
    }
}
