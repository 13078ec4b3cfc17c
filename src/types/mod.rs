mod coercion;
mod errors;

pub use coercion::{decimal_or_zero, optional_date, parse_date, parse_decimal, DATE_FORMAT};
pub use errors::CoercionError;
