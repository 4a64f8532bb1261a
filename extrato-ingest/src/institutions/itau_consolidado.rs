//! Itaú consolidated statement: rows start after the movement table header,
//! `DD/MM` dates with the year taken from the first page, trailing `-` on
//! debits and a balance column after the amount.

use super::{columns, strings};
use crate::adapter::{AdapterSpec, AfterClose};
use crate::period::YearRule;
use crate::tokens::{AmountPlacement, DateGrammar, DatePlacement, SignConvention};

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::ShortNumeric],
        date_placement: DatePlacement::LineStart,
        sign: SignConvention::TrailingMarker,
        amount_placement: AmountPlacement::Anywhere,
        section_start: strings(&[
            r"data descri[çc][ãa]o entradas r\$ sa[íi]das r\$ saldo",
            r"\(cr[ée]ditos\) \(d[ée]bitos\)",
            r"conta corrente \| movimenta[çc][ãa]o",
        ]),
        noise: strings(&[
            "saldo",
            "realce",
            "extrato mensal",
            "notas explicativas",
            "limite contratado",
            r"data da pr[óo]xima renova[çc][ãa]o",
            "juros",
            r"\biof\b",
            "custo efetivo total",
            r"totalizador de aplica[çc][õo]es autom[áa]ticas",
            r"principal bruto l[íi]quido",
            "historico",
            r"movimenta[çc][ãa]o - aplica[çc][õo]es",
            r"resumo - m[êe]s",
            "na conta corrente",
            "principal",
            "total",
            "lis adicional",
            r"lis receb[íi]veis",
        ]),
        year_rule: YearRule::Header {
            pattern: r"\b(?P<year>20\d{2})\b".to_string(),
        },
        after_close: AfterClose::KeepDate,
        columns: columns("Data", "Descrição", "Valor (R$)"),
        ..AdapterSpec::new("itau_consolidado", "Itaú (extrato consolidado)")
    }
}
