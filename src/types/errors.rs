use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoercionError {
    #[error("Coercion error: Value is blank")]
    Blank,
    #[error("Coercion error: Invalid decimal '{value}': {source}")]
    InvalidDecimal {
        value: String,
        source: rust_decimal::Error
    },
    #[error("Coercion error: Invalid decimal '{value}': Digit separators other than ',' are not allowed")]
    DigitSeparator {
        value: String
    },
    #[error("Coercion error: Date '{value}' is not in MM/DD/YYYY form")]
    DateShape {
        value: String
    },
    #[error("Coercion error: Invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError
    }
}
