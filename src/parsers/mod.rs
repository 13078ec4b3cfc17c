mod batch;
mod errors;
mod fidelity;
mod header;
mod registry;
mod row;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::error;

use crate::models::{ParseError, Transaction};

pub use batch::parse_statement;
pub use errors::RowError;
pub use fidelity::FidelityParser;
pub use header::{is_empty_row, locate_headers, normalize_header, validate_headers, HeaderRow};
pub use registry::ParserRegistry;
pub use row::RowValues;

/// A broker statement format.
///
/// Implementations must not keep mutable state between calls; one instance may parse
/// many files, from several threads.
pub trait TransactionParser: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Whether the raw file content looks like this format.
    fn supports(&self, content: &str) -> bool;

    /// Parses a whole statement into records, in source order.
    fn parse(&self, reader: &mut dyn Read) -> Result<Vec<Transaction>, ParseError>;

    fn parse_file(&self, path: &Path) -> Result<Vec<Transaction>, ParseError> {
        let mut file = File::open(path).map_err(|error| {
            error!("Failed to read file: {} | {error}", path.display());
            ParseError::io(error)
        })?;

        self.parse(&mut file)
    }
}
