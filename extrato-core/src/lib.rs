//! extrato-core: data model shared by the statement engine and its callers

pub mod money;
pub mod transaction;

pub use money::{Amount, AmountError, MoneyFormat};
pub use transaction::{collapse_whitespace, Transaction, TransactionError};
