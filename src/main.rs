use std::fs;
use std::io::{stderr, stdout, IsTerminal};
use std::path::PathBuf;
use std::process::exit;
use std::time::Instant;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use csv::WriterBuilder;
use rust_decimal::Decimal;
use serde::Serialize;
use tokio::task::spawn_blocking;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use trade_statement_parser::models::{StockDetails, Transaction, TransactionType};
use trade_statement_parser::parsers::ParserRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: trade-statement-parser [statement].csv [log_level:optional] > [output].csv");
        eprintln!("Available log levels: off, error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = PathBuf::from(&args[1]);
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let content = fs::read(&path)?;
    let registry = ParserRegistry::default();
    let parser = registry.detect(&String::from_utf8_lossy(&content))
        .ok_or_else(|| anyhow!("No parser supports statement: {}", path.display()))?;

    info!("Parsing {} with the [{}] parser", path.display(), parser.name());

    let timer = Instant::now();
    let transactions = spawn_blocking(move || parser.parse_file(&path)).await??;
    let duration = timer.elapsed();

    info!("Parsed {} transactions in: {duration:?}", transactions.len());

    write_results_to_stdout(&transactions)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    level.parse::<LevelFilter>().unwrap_or_else(|error| {
        eprintln!("Invalid log level '{level}' ({error}), defaulting to 'error'");
        LevelFilter::ERROR
    })
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the parsed records, so diagnostics go to stderr
    let stderr_log = fmt::layer()
        .with_target(false)
        .with_ansi(stderr().is_terminal())
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(stderr_log)
        .init();
}

const OUTPUT_COLUMNS: [&str; 17] = [
    "run_date", "account", "action", "symbol", "description", "type", "quantity", "price", "currency",
    "exchange_quantity", "exchange_currency", "exchange_rate", "commission", "fees", "accrued_interest",
    "amount", "settlement_date"
];

/// Flat output shape of a record, one CSV column per field.
#[derive(Serialize)]
struct TransactionRow<'a> {
    run_date: Option<NaiveDate>,
    account: &'a str,
    action: &'a str,
    symbol: &'a str,
    description: &'a str,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
    quantity: Decimal,
    price: Decimal,
    currency: &'a str,
    exchange_quantity: Decimal,
    exchange_currency: &'a str,
    exchange_rate: Decimal,
    commission: Decimal,
    fees: Decimal,
    accrued_interest: Decimal,
    amount: Decimal,
    settlement_date: Option<NaiveDate>
}

impl<'a> From<&'a Transaction> for TransactionRow<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        let stock = transaction.stock();
        let decimal = |field: fn(&StockDetails) -> Decimal| stock.map_or(Decimal::ZERO, field);

        Self {
            run_date: transaction.run_date,
            account: &transaction.account,
            action: &transaction.action,
            symbol: stock.map_or("", |stock| stock.symbol.as_str()),
            description: &transaction.description,
            transaction_type: transaction.transaction_type(),
            quantity: decimal(|stock| stock.quantity),
            price: decimal(|stock| stock.price),
            currency: &transaction.currency,
            exchange_quantity: decimal(|stock| stock.exchange_quantity),
            exchange_currency: stock.map_or("", |stock| stock.exchange_currency.as_str()),
            exchange_rate: decimal(|stock| stock.exchange_rate),
            commission: transaction.commission,
            fees: transaction.fees,
            accrued_interest: decimal(|stock| stock.accrued_interest),
            amount: transaction.amount,
            settlement_date: transaction.settlement_date
        }
    }
}

fn write_results_to_stdout(transactions: &[Transaction]) -> Result<()> {
    let mut output = WriterBuilder::new()
        .has_headers(false)
        .from_writer(stdout().lock());

    output.write_record(OUTPUT_COLUMNS)?;

    for transaction in transactions {
        output.serialize(TransactionRow::from(transaction))?;
    }

    output.flush()?;

    Ok(())
}
