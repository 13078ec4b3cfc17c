use std::io::Read;

use crate::config::CsvConfig;
use crate::models::{ParseError, StockDetails, Transaction, TransactionDetails};
use crate::parsers::{parse_statement, RowValues, TransactionParser};
use crate::types::{decimal_or_zero, optional_date};

/// Columns a Fidelity activity export must have, compared after normalization.
pub const REQUIRED_HEADERS: [&str; 5] = ["Run Date", "Account", "Action", "Symbol", "Amount"];

/// Boilerplate that only shows up in Fidelity activity exports.
const MARKERS: [&str; 2] = ["Individual - TOD", "YOU BOUGHT CLOSING TRANSACTION"];

/// Parser for Fidelity account activity CSV exports.
#[derive(Debug, Clone, Default)]
pub struct FidelityParser {
    config: CsvConfig
}

impl FidelityParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: CsvConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds a stock record out of one row. Never fails: blank or malformed numbers
    /// become zero and blank or malformed dates become `None`.
    pub fn map_row(values: &RowValues<'_>) -> Transaction {
        let decimal = |name: &str| decimal_or_zero(values.get(name));

        Transaction {
            run_date: optional_date(values.get("run_date")),
            account: values.text("account"),
            action: values.text("action"),
            amount: decimal("amount"),
            currency: values.text("currency"),
            commission: decimal("commission"),
            fees: decimal("fees"),
            settlement_date: optional_date(values.get("settlement_date")),
            description: values.text("description"),
            details: TransactionDetails::Stock(StockDetails {
                symbol: values.text("symbol"),
                quantity: decimal("quantity"),
                price: decimal("price"),
                exchange_quantity: decimal("exchange_quantity"),
                exchange_currency: values.text("exchange_currency"),
                exchange_rate: decimal("exchange_rate"),
                accrued_interest: decimal("accrued_interest")
            })
        }
    }
}

impl TransactionParser for FidelityParser {
    fn name(&self) -> &'static str {
        "fidelity"
    }

    fn supports(&self, content: &str) -> bool {
        MARKERS.iter().any(|marker| content.contains(marker))
    }

    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<Transaction>, ParseError> {
        parse_statement(reader, &self.config, &REQUIRED_HEADERS, |values| Ok(Self::map_row(values)))
    }
}
