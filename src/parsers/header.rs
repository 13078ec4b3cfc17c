use std::collections::HashSet;
use std::io::Read;

use csv::StringRecord;
use tracing::{debug, error};

use crate::config::RowReader;
use crate::models::ParseError;
use crate::parsers::RowValues;

/// The discovered header row, already normalized, in source column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRow {
    names: Vec<String>,
    line: u64
}

impl HeaderRow {
    pub fn new(names: Vec<String>, line: u64) -> Self {
        Self { names, line }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Line the header was found on.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Pairs each header with the cell at the same position. Cells past the last
    /// header are ignored and headers past the last cell are absent.
    pub fn values<'a>(&'a self, row: &'a StringRecord) -> RowValues<'a> {
        RowValues::new(self.names.iter().map(String::as_str).zip(row.iter()))
    }
}

/// Canonical form used to compare header names: trimmed, lower case, spaces and
/// slashes turned into underscores, parentheses removed.
pub fn normalize_header(header: &str) -> String {
    header.trim()
        .to_lowercase()
        .replace([' ', '/'], "_")
        .replace(['(', ')'], "")
}

pub fn is_empty_row(row: &StringRecord) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Reads rows until one carries every required header, skipping blank rows and any
/// preamble a broker puts above the table.
pub fn locate_headers<R: Read>(rows: &mut RowReader<R>, required_headers: &[&str]) -> Result<HeaderRow, ParseError> {
    let required: HashSet<String> = required_headers.iter().map(|header| normalize_header(header)).collect();

    while let Some(result) = rows.next() {
        let row = result.map_err(|error| {
            error!("Error reading CSV at line {} while looking for headers: {error}", rows.line());
            ParseError::read(rows.line(), error)
        })?;

        if is_empty_row(&row) {
            debug!("Skipping empty row at line {}", rows.line());
            continue;
        }

        let present: HashSet<String> = row.iter()
            .filter(|cell| !cell.trim().is_empty())
            .map(normalize_header)
            .collect();

        if present.is_superset(&required) {
            debug!("Found headers at line {}: {:?}", rows.line(), row);
            let names = row.iter().map(normalize_header).collect();
            return Ok(HeaderRow::new(names, rows.line()));
        }
    }

    error!("No valid headers found");
    Err(ParseError::no_headers())
}

/// Fails with the required headers that are absent from `headers`, in the order
/// they were listed.
pub fn validate_headers(headers: &HeaderRow, required_headers: &[&str]) -> Result<(), ParseError> {
    let present: HashSet<&str> = headers.names().iter().map(String::as_str).collect();

    let missing: Vec<String> = required_headers.iter()
        .map(|header| normalize_header(header))
        .filter(|header| !present.contains(header.as_str()))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    let error = ParseError::missing_headers(missing, headers.names());
    error!("{error}");

    Err(error)
}
