mod errors;
mod transaction;

use serde::Serialize;

pub use errors::ParseError;
pub use transaction::{StockDetails, Transaction, TransactionDetails};

/// Discriminator naming the concrete shape of a [`Transaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Stock
}
