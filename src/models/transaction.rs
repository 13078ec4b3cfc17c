use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::TransactionType;

/// A single trade or cash movement read from a broker statement.
///
/// Records are plain values: built once by a row mapper and never modified afterwards.
/// Monetary fields are always present (zero when the statement left them blank) while
/// dates are optional because brokers leave settlement dates empty for pending activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub run_date: Option<NaiveDate>,
    pub account: String,
    pub action: String,
    pub amount: Decimal,
    pub currency: String,
    pub commission: Decimal,
    pub fees: Decimal,
    pub settlement_date: Option<NaiveDate>,
    pub description: String,
    /// Variant specific fields. Also decides the record's [`TransactionType`].
    pub details: TransactionDetails
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionDetails {
    Stock(StockDetails)
}

/// Fields only equity trades carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockDetails {
    pub symbol: String,
    pub quantity: Decimal,
    pub price: Decimal,
    /// Quantity in the foreign exchange leg of the trade, if any.
    pub exchange_quantity: Decimal,
    pub exchange_currency: String,
    pub exchange_rate: Decimal,
    pub accrued_interest: Decimal
}

impl Transaction {
    pub fn transaction_type(&self) -> TransactionType {
        match self.details {
            TransactionDetails::Stock(_) => TransactionType::Stock
        }
    }

    pub fn stock(&self) -> Option<&StockDetails> {
        match &self.details {
            TransactionDetails::Stock(details) => Some(details)
        }
    }
}
