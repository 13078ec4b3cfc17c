use thiserror::Error;

/// A single data row could not be turned into a record. The rest of the batch goes on.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("Row rejected: {0}")]
    Rejected(String)
}
