//! Field Validation
//!
//! Helpers shared by the product and order rule tables. Submitted fields are
//! plain text; these functions decide whether a field carries a value and
//! whether it reads as a number under the active [`DecimalSeparator`].

pub mod number;

pub use number::{DecimalSeparator, NumberError, format_decimal, parse_decimal, parse_integer};

/// Whether a submitted text field carries a value.
///
/// Whitespace-only input counts as missing.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}
