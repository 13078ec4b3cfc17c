use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("Tokenizer error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Tokenizer error: Line break inside a quoted field on line [{line}] while multi-line fields are disabled")]
    MultilineField {
        line: u64
    }
}
