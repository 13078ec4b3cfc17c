use std::io::{self, Chain, Cursor, Read};

use csv::{Reader, StringRecord, StringRecordsIntoIter};

use crate::config::TokenizerError;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Discards a leading UTF-8 byte order mark. Any other leading bytes are replayed
/// ahead of the rest of the stream, however few bytes each read returns.
pub fn skip_bom<R: Read>(mut reader: R) -> io::Result<Chain<Cursor<Vec<u8>>, R>> {
    let mut prefix = Vec::with_capacity(UTF8_BOM.len());
    (&mut reader).take(UTF8_BOM.len() as u64).read_to_end(&mut prefix)?;

    if prefix == UTF8_BOM {
        prefix.clear();
    }

    Ok(Cursor::new(prefix).chain(reader))
}

/// Lazy, single-pass sequence of raw rows.
///
/// Tracks the 1-based physical line on which the most recent row (or failed row)
/// started. Completely empty lines are dropped by the tokenizer but still counted.
pub struct RowReader<R> {
    records: StringRecordsIntoIter<R>,
    multiline_enabled: bool,
    line: u64
}

impl<R: Read> RowReader<R> {
    pub fn new(reader: Reader<R>, multiline_enabled: bool) -> Self {
        Self {
            records: reader.into_records(),
            multiline_enabled,
            line: 0
        }
    }

    /// Line number of the last row pulled from the reader, 0 before the first one.
    pub fn line(&self) -> u64 {
        self.line
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<StringRecord, TokenizerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.records.next()?;
        let position = match &result {
            Ok(row) => row.position(),
            Err(error) => error.position()
        };
        self.line = position.map_or(self.line + 1, |position| position.line());

        let row = match result {
            Ok(row) => row,
            Err(error) => return Some(Err(TokenizerError::from(error)))
        };

        if !self.multiline_enabled && row.iter().any(|cell| cell.contains(['\n', '\r'])) {
            return Some(Err(TokenizerError::MultilineField { line: self.line }));
        }

        Some(Ok(row))
    }
}
