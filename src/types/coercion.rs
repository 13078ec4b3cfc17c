use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::types::CoercionError;

/// Month/day/year, the only date layout brokers use in these exports.
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parses an exact decimal, ignoring surrounding whitespace and thousands separators.
///
/// Plain notation is tried first, then scientific (`1.5E+3`).
pub fn parse_decimal(value: &str) -> Result<Decimal, CoercionError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(CoercionError::Blank);
    }

    //NOTE: rust_decimal silently skips '_' inside numbers
    if value.contains('_') {
        return Err(CoercionError::DigitSeparator { value: value.to_string() });
    }

    let cleaned = value.replace(',', "");

    Decimal::from_str(&cleaned)
        .or_else(|error| Decimal::from_scientific(&cleaned).map_err(|_| error))
        .map_err(|source| CoercionError::InvalidDecimal { value: value.to_string(), source })
}

/// Parses a zero-padded month/day/year date with a four digit year.
pub fn parse_date(value: &str) -> Result<NaiveDate, CoercionError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(CoercionError::Blank);
    }

    // chrono accepts unpadded fields and short years, `01/15/24` would land in year 24
    if !has_date_shape(value) {
        return Err(CoercionError::DateShape { value: value.to_string() });
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|source| CoercionError::InvalidDate { value: value.to_string(), source })
}

fn has_date_shape(value: &str) -> bool {
    value.len() == 10 && value.bytes().enumerate().all(|(index, byte)| match index {
        2 | 5 => byte == b'/',
        _ => byte.is_ascii_digit()
    })
}

/// Coerces an optional cell to a decimal. Absent, blank and unparsable input is zero.
pub fn decimal_or_zero(value: Option<&str>) -> Decimal {
    match value.map(parse_decimal) {
        Some(Ok(decimal)) => decimal,
        Some(Err(CoercionError::Blank)) | None => Decimal::ZERO,
        Some(Err(error)) => {
            debug!("{error}, defaulting to zero");
            Decimal::ZERO
        }
    }
}

/// Coerces an optional cell to a date. Absent, blank and unparsable input is `None`.
pub fn optional_date(value: Option<&str>) -> Option<NaiveDate> {
    match value.map(parse_date) {
        Some(Ok(date)) => Some(date),
        Some(Err(CoercionError::Blank)) | None => None,
        Some(Err(error)) => {
            debug!("{error}, leaving date empty");
            None
        }
    }
}
