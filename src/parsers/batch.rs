use std::io::Read;

use tracing::{debug, error, warn};

use crate::config::{skip_bom, CsvConfig};
use crate::models::{ParseError, Transaction};
use crate::parsers::{is_empty_row, locate_headers, validate_headers, RowError, RowValues};

/// Runs one statement through the pipeline: BOM removal, header discovery and
/// validation, then `map_row` for every non-empty data row.
///
/// Rows `map_row` rejects are logged and skipped. Anything wrong with the file
/// itself (no header, missing columns, unreadable CSV) fails the whole call.
pub fn parse_statement<R, F>(reader: R, config: &CsvConfig, required_headers: &[&str], mut map_row: F) -> Result<Vec<Transaction>, ParseError>
where
    R: Read,
    F: FnMut(&RowValues<'_>) -> Result<Transaction, RowError>
{
    let reader = skip_bom(reader).map_err(|error| {
        error!("Failed to read statement: {error}");
        ParseError::io(error)
    })?;

    let mut rows = config.create_reader(reader);
    let headers = locate_headers(&mut rows, required_headers)?;
    validate_headers(&headers, required_headers)?;
    debug!("Reading data rows after header line {}", headers.line());

    let mut transactions = Vec::new();

    while let Some(result) = rows.next() {
        let line_number = rows.line();

        let row = result.map_err(|error| {
            error!("Error reading CSV at line {line_number}: {error}");
            ParseError::read(line_number, error)
        })?;

        if is_empty_row(&row) {
            debug!("Skipping empty row at line {line_number}");
            continue;
        }

        match map_row(&headers.values(&row)) {
            Ok(transaction) => transactions.push(transaction),
            Err(error) => warn!("Error parsing row {line_number}: {error}")
        }
    }

    Ok(transactions)
}
