mod csv_config;
mod errors;
mod row_reader;

pub use csv_config::CsvConfig;
pub use errors::TokenizerError;
pub use row_reader::{skip_bom, RowReader};
