//! Bradesco (Net Empresa): date alone on a line, then description/amount
//! pairs for that day. A running balance may follow the amount.

use super::{columns, strings};
use crate::adapter::{AdapterSpec, AfterClose};
use crate::tokens::{AmountPlacement, DateGrammar, DatePlacement, SignConvention};

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::FullNumeric],
        date_placement: DatePlacement::WholeLine,
        sign: SignConvention::LeadingMinus,
        amount_placement: AmountPlacement::Anywhere,
        noise: strings(&[
            r"Folha \d+/\d+",
            r"Extrato Mensal\s*/\s*Por Per[íi]odo",
            r"CNPJ[:\s]*\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}",
            r"Nome do usu[áa]rio:",
            r"Data da opera[çc][ãa]o: \d{2}/\d{2}/\d{4}",
            r"bradesco",
            r"net empresa",
            r"Assistente de IA",
            r"\b(SALDO|TOTAL)\b",
        ]),
        after_close: AfterClose::KeepDate,
        columns: columns("Data", "Lançamento", "Valor (R$)"),
        ..AdapterSpec::new("bradesco", "Bradesco")
    }
}
