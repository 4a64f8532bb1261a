//! Nubank: `05 MAR 2024` day headers, unsigned amounts whose sign comes from
//! the "Total de entradas" / "Total de saídas" section they sit under.

use super::{columns, strings};
use crate::adapter::{AdapterSpec, AfterClose, Polarity, PolarityMarker};
use crate::tokens::DateGrammar;

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        date_grammars: vec![DateGrammar::MonthAbbrev],
        polarity_markers: vec![
            PolarityMarker {
                pattern: "total de entradas".to_string(),
                polarity: Polarity::Credit,
            },
            PolarityMarker {
                pattern: "total de sa[íi]das".to_string(),
                polarity: Polarity::Debit,
            },
        ],
        noise: strings(&[
            "NU PAGAMENTOS",
            "CNPJ",
            "EXTRATO",
            "P[ÁA]GINA",
            r"VALORES EM R\$",
            "SALDO (FINAL|INICIAL|DO PER[ÍI]ODO)",
            "AG[ÊE]NCIA.*CONTA",
            "MOVIMENTA[ÇC][ÕO]ES -",
        ]),
        after_close: AfterClose::KeepDate,
        columns: columns("Data", "Movimentações", "Valor"),
        ..AdapterSpec::new("nubank", "Nubank")
    }
}
