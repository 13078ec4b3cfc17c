use std::io;

use thiserror::Error;

use crate::config::TokenizerError;

/// Failure that aborts the parse of a whole statement.
///
/// Problems confined to a single cell never surface here, they are absorbed by
/// defaulting the field.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("No valid headers found")]
    NoHeaders,
    #[error("Missing required headers: {}", .missing.join(", "))]
    MissingHeaders {
        missing: Vec<String>,
        raw_content: String
    },
    #[error("Error reading CSV at line [{line_number}]")]
    Read {
        line_number: u64,
        source: TokenizerError
    },
    #[error("Failed to read file: {source}")]
    Io {
        source: io::Error
    }
}

impl ParseError {
    pub fn no_headers() -> Self {
        Self::NoHeaders
    }

    pub fn missing_headers(missing: Vec<String>, headers: &[String]) -> Self {
        Self::MissingHeaders {
            missing,
            raw_content: headers.join(",")
        }
    }

    pub fn read(line_number: u64, source: TokenizerError) -> Self {
        Self::Read { line_number, source }
    }

    pub fn io(source: io::Error) -> Self {
        Self::Io { source }
    }

    /// 1-based line the failure occurred on, 0 when it is not tied to a row.
    pub fn line_number(&self) -> u64 {
        match self {
            Self::Read { line_number, .. } => *line_number,
            Self::NoHeaders | Self::MissingHeaders { .. } | Self::Io { .. } => 0
        }
    }

    /// Raw content that triggered the failure, empty when there is none.
    pub fn raw_content(&self) -> &str {
        match self {
            Self::MissingHeaders { raw_content, .. } => raw_content,
            Self::NoHeaders | Self::Read { .. } | Self::Io { .. } => ""
        }
    }
}
