//! Token recognizers: pure functions from a text fragment to a resolved value.

pub mod amount;
pub mod date;
pub mod month;

pub use amount::{AmountPlacement, AmountRecognizer, AmountToken, SignConvention};
pub use date::{DateGrammar, DatePlacement, DateRecognizer, DateToken};
