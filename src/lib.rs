//! Turns broker-exported CSV statements into typed trade records.
//!
//! A statement is scanned for its real header row (brokers wrap the table in
//! disclaimers and summaries), checked for the columns a format requires, and every
//! data row is mapped into a [`models::Transaction`]. Bad cells default instead of
//! failing; only problems with the file itself abort a parse.

pub mod config;
pub mod models;
pub mod parsers;
pub mod types;
