//! Number parsing for submitted text fields.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The single decimal separator accepted in submitted prices.
///
/// Only one separator is ever active: with [`DecimalSeparator::Period`] the
/// text `"10,99"` is not a number, and with [`DecimalSeparator::Comma`] the
/// text `"10.99"` is not a number. Grouping separators are never accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DecimalSeparator {
    /// `10.99`
    #[default]
    Period,

    /// `10,99`
    Comma,
}

impl DecimalSeparator {
    /// The separator character.
    pub const fn as_char(self) -> char {
        match self {
            Self::Period => '.',
            Self::Comma => ',',
        }
    }
}

/// Number parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    /// Text is not a decimal in the accepted format.
    #[error("not a decimal number: {0:?}")]
    NotADecimal(String),

    /// Text is not a whole number that fits in 32 bits.
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
}

/// Parse a decimal written with the given separator.
///
/// Accepts an optional leading `-`, one or more ASCII digits, then optionally
/// the separator followed by between one and `max_fraction_digits` digits.
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`NumberError::NotADecimal`] when the text does not match that
/// format or the value does not fit in a [`Decimal`].
pub fn parse_decimal(
    text: &str,
    separator: DecimalSeparator,
    max_fraction_digits: usize,
) -> Result<Decimal, NumberError> {
    let not_a_decimal = || NumberError::NotADecimal(text.to_string());

    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (integral, fraction) = match unsigned.split_once(separator.as_char()) {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (unsigned, None),
    };

    if !is_digits(integral) {
        return Err(not_a_decimal());
    }

    let mut normalised = String::with_capacity(trimmed.len());

    if negative {
        normalised.push('-');
    }

    normalised.push_str(integral);

    if let Some(fraction) = fraction {
        if !is_digits(fraction) || fraction.len() > max_fraction_digits {
            return Err(not_a_decimal());
        }

        normalised.push('.');
        normalised.push_str(fraction);
    }

    Decimal::from_str(&normalised).map_err(|_source| not_a_decimal())
}

/// Parse a whole number (optionally negative) that fits in an `i32`.
///
/// # Errors
///
/// Returns [`NumberError::NotAnInteger`] for anything else, including
/// fractional values and out-of-range numbers.
pub fn parse_integer(text: &str) -> Result<i32, NumberError> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);

    if !is_digits(unsigned) {
        return Err(NumberError::NotAnInteger(text.to_string()));
    }

    trimmed
        .parse::<i32>()
        .map_err(|_source| NumberError::NotAnInteger(text.to_string()))
}

/// Render a decimal using the given separator.
pub fn format_decimal(value: Decimal, separator: DecimalSeparator) -> String {
    let rendered = value.to_string();

    match separator {
        DecimalSeparator::Period => rendered,
        DecimalSeparator::Comma => rendered.replace('.', ","),
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}
