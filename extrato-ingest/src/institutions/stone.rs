//! Stone: the date line carries the entry type, the amount and the running
//! balance; the description follows on its own lines until the next date.

use super::{columns, strings};
use crate::adapter::{AdapterSpec, AmountPosition};
use crate::tokens::{AmountPlacement, DateGrammar, DatePlacement};

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::FullNumeric],
        date_placement: DatePlacement::LineStart,
        amount_placement: AmountPlacement::Anywhere,
        amount_position: AmountPosition::OnDateLine,
        noise: strings(&[
            r"informa[çc][õo]es do comprovante",
            r"c[óo]digo de autentica[çc][ãa]o",
            r"\bouvidoria\b",
            r"meajuda@stone",
            r"\bcnpj\b",
            r"\bligue para\b",
            r"\bfale com a gente\b",
            r"extrato de conta corrente",
            r"\bemitido no dia\b",
            r"\bsaldo \(r\$\)",
            r"\bcontraparte\b",
            r"^(titular|institui[çc][ãa]o|documento|per[íi]odo|ag[êe]ncia|conta)\b",
        ]),
        columns: columns("Data", "Lançamento", "Valor (R$)"),
        ..AdapterSpec::new("stone", "Stone")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::institutions::fixture::{row, rows, scan};

    #[test]
    fn test_stone_statement() {
        let text = r#"
Extrato de conta corrente
Titular: EMPRESA LTDA
Período: 01/03/2024 a 31/03/2024
Data Tipo Valor Saldo (R$) Contraparte
01/03/2024 Crédito 1.500,00 3.000,00
Pix recebido
CLIENTE A
02/03/2024 Débito -250,00 2.750,00
Pagamento de boleto
FORNECEDOR B
Ouvidoria: 0800 000 0000
03/03/2024 Débito -R$ 12,90 2.737,10
Tarifa
"#;
        let out = scan(spec(), text);
        assert_eq!(
            rows(&out),
            vec![
                row("01/03/2024", "Pix recebido CLIENTE A", "1500.00"),
                row("02/03/2024", "Pagamento de boleto FORNECEDOR B", "-250.00"),
                row("03/03/2024", "Tarifa", "-12.90"),
            ]
        );
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn test_stone_sign_comes_from_printed_minus() {
        let out = scan(spec(), "05/03/2024 Débito 40,00 100,00\nEstorno\n");
        assert_eq!(rows(&out), vec![row("05/03/2024", "Estorno", "40.00")]);
    }
}
