use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::amount::MAX_SIGNIFICANT_DIGITS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount error: Value is an empty string")]
    Empty,
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: [{0}] is not greater than zero")]
    NotPositive(Decimal),
    #[error("Amount error: [{0}] has more than {max} significant digits", max = MAX_SIGNIFICANT_DIGITS)]
    TooPrecise(Decimal)
}
