//! Built-in institution configurations.
//!
//! Each module returns one [`AdapterSpec`]. There is no per-bank scanning
//! code; a new institution is a new spec.

use crate::adapter::{AdapterSpec, ColumnSchema};

pub mod asaas;
pub mod banco_do_brasil;
pub mod bnb;
pub mod bradesco;
pub mod btg;
pub mod caixa;
pub mod daycoval;
pub mod inter;
pub mod itau;
pub mod itau_consolidado;
pub mod itau_tabular;
pub mod itau_texto;
pub mod nubank;
pub mod pagbank;
pub mod safra;
pub mod santander;
pub mod sicredi;
pub mod sofisa;
pub mod stone;
pub mod xp;

pub fn builtin_specs() -> Vec<AdapterSpec> {
    vec![
        asaas::spec(),
        banco_do_brasil::spec(),
        bnb::spec(),
        bradesco::spec(),
        btg::spec(),
        caixa::spec(),
        daycoval::spec(),
        inter::spec(),
        itau::spec(),
        itau_consolidado::spec(),
        itau_tabular::spec(),
        itau_texto::spec(),
        nubank::spec(),
        pagbank::spec(),
        safra::spec(),
        santander::spec(),
        sicredi::spec(),
        sofisa::spec(),
        stone::spec(),
        xp::spec(),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn columns(date: &str, description: &str, amount: &str) -> ColumnSchema {
    ColumnSchema {
        date: date.to_string(),
        description: description.to_string(),
        amount: amount.to_string(),
        ..ColumnSchema::default()
    }
}
