//! BTG Pactual: date line, description lines, amount line.

use super::{columns, strings};
use crate::adapter::AdapterSpec;

pub fn spec() -> AdapterSpec {
    AdapterSpec {
        exclusion_keywords: strings(&["saldo"]),
        columns: columns(
            "Data lançamento",
            "Descrição do lançamento",
            "Entradas / Saídas (R$)",
        ),
        ..AdapterSpec::new("btg", "BTG Pactual")
    }
}
