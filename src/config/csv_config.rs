use std::io::Read;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::config::RowReader;

/// Settings for the delimited-text tokenizer that sits underneath every parser.
///
/// Broker exports are mostly plain RFC 4180 files, but the knobs are exposed so a
/// variant with an unusual dialect can still reuse the same pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Field separator.
    pub separator: u8,
    /// Character that opens and closes a quoted field.
    pub quote_char: u8,
    /// Escape character inside quoted fields. Only honoured when `double_quote` is off.
    pub escape_char: u8,
    /// Whether a doubled quote (`""`) inside a quoted field is a literal quote.
    pub double_quote: bool,
    /// Strip whitespace surrounding each cell.
    pub ignore_leading_whitespace: bool,
    /// Treat quote characters as ordinary text.
    pub ignore_quotations: bool,
    /// Allow quoted fields to span several physical lines.
    pub multiline_enabled: bool
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            separator: b',',
            quote_char: b'"',
            escape_char: b'\\',
            double_quote: true,
            ignore_leading_whitespace: true,
            ignore_quotations: false,
            multiline_enabled: true
        }
    }
}

impl CsvConfig {
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_quote_char(mut self, quote_char: u8) -> Self {
        self.quote_char = quote_char;
        self
    }

    pub fn with_escape_char(mut self, escape_char: u8) -> Self {
        self.escape_char = escape_char;
        self
    }

    pub fn with_double_quote(mut self, double_quote: bool) -> Self {
        self.double_quote = double_quote;
        self
    }

    pub fn with_ignore_leading_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_leading_whitespace = ignore;
        self
    }

    pub fn with_ignore_quotations(mut self, ignore: bool) -> Self {
        self.ignore_quotations = ignore;
        self
    }

    pub fn with_multiline_enabled(mut self, enabled: bool) -> Self {
        self.multiline_enabled = enabled;
        self
    }

    /// Builds a row reader over `reader` using these settings.
    ///
    /// Rows are read without a header record and with a flexible width because the
    /// header has to be discovered among preamble rows of arbitrary length.
    pub fn create_reader<R: Read>(&self, reader: R) -> RowReader<R> {
        let trim = if self.ignore_leading_whitespace { Trim::Fields } else { Trim::None };

        let csv_reader = ReaderBuilder::new()
            .delimiter(self.separator)
            .quote(self.quote_char)
            .escape(Some(self.escape_char))
            .double_quote(self.double_quote)
            .quoting(!self.ignore_quotations)
            .trim(trim)
            .flexible(true)
            .has_headers(false)
            .from_reader(reader);

        RowReader::new(csv_reader, self.multiline_enabled)
    }
}
