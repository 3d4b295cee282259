//! Brazilian-locale rendering of monetary values: two fraction digits, a comma as the
//! decimal separator and no thousands grouping (`R$ 1234,56`).

use std::str::FromStr;

use rust_decimal::prelude::*;

use crate::error::GenError;

pub const NUM_DECIMAL_PLACES: u32 = 2;
pub const CURRENCY_PREFIX: &str = "R$";

/// Renders `value` with exactly two fraction digits and a comma separator.
#[must_use]
pub fn format_decimal(value: Decimal) -> String {
    let mut value = value.round_dp(NUM_DECIMAL_PLACES);
    value.rescale(NUM_DECIMAL_PLACES);
    value.to_string().replace('.', ",")
}

#[must_use]
pub fn format_brl(value: Decimal) -> String {
    format!("{} {}", CURRENCY_PREFIX, format_decimal(value))
}

/// # Errors
/// Errors when `text` is not a comma-decimal number; a period is never accepted
pub fn parse_decimal(text: &str) -> Result<Decimal, GenError> {
    if text.contains('.') {
        return Err(GenError::InvalidMoney(text.to_owned()));
    }
    let normalized = text.trim().replace(',', ".");
    Decimal::from_str(&normalized).map_err(|_| GenError::InvalidMoney(text.to_owned()))
}

/// # Errors
/// Errors when `text` lacks the `R$` prefix or the remainder is not a comma-decimal number
pub fn parse_brl(text: &str) -> Result<Decimal, GenError> {
    text.trim()
        .strip_prefix(CURRENCY_PREFIX)
        .ok_or_else(|| GenError::InvalidMoney(text.to_owned()))
        .and_then(parse_decimal)
        .map_err(|_| GenError::InvalidMoney(text.to_owned()))
}

/// Builds a value from a whole number of cents.
#[must_use]
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, NUM_DECIMAL_PLACES)
}
