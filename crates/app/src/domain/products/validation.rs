//! Product validation rules.
//!
//! The rules are an ordered table rather than attributes on the view model.
//! Each field is checked against its rules in order and reports only the
//! first one it breaks; every field is always checked.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::Serialize;
use smallvec::SmallVec;

use crate::{
    domain::products::models::ProductViewModel,
    validation::{DecimalSeparator, is_present, parse_decimal, parse_integer},
};

/// Maximum number of digits allowed after the decimal separator in a price.
pub const PRICE_FRACTION_DIGITS: usize = 2;

/// Highest accepted unit price.
///
/// Any cart of priced lines stays far inside [`Decimal`] range below this.
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Violations reported for one submission, at most one per field.
pub type ProductViolations = SmallVec<[ProductRule; 3]>;

/// Submitted product fields that carry rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Price,
    Stock,
}

impl ProductField {
    fn value_of(self, product: &ProductViewModel) -> &str {
        match self {
            Self::Name => &product.name,
            Self::Price => &product.price,
            Self::Stock => &product.stock,
        }
    }
}

/// Product rule identifiers.
///
/// Each variant names the failure, not the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProductRule {
    MissingName,
    MissingPrice,
    PriceNotANumber,
    PriceNotGreaterThanZero,
    MissingQuantity,
    StockNotAnInteger,
    StockNotGreaterThanZero,
}

/// The rule table, in reporting order.
const RULES: [(ProductField, &[ProductRule]); 3] = [
    (ProductField::Name, &[ProductRule::MissingName]),
    (
        ProductField::Price,
        &[
            ProductRule::MissingPrice,
            ProductRule::PriceNotANumber,
            ProductRule::PriceNotGreaterThanZero,
        ],
    ),
    (
        ProductField::Stock,
        &[
            ProductRule::MissingQuantity,
            ProductRule::StockNotAnInteger,
            ProductRule::StockNotGreaterThanZero,
        ],
    ),
];

impl ProductRule {
    /// Every rule, in table order.
    pub const ALL: [Self; 7] = [
        Self::MissingName,
        Self::MissingPrice,
        Self::PriceNotANumber,
        Self::PriceNotGreaterThanZero,
        Self::MissingQuantity,
        Self::StockNotAnInteger,
        Self::StockNotGreaterThanZero,
    ];

    /// Stable identifier, used as the localization key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingName => "MissingName",
            Self::MissingPrice => "MissingPrice",
            Self::PriceNotANumber => "PriceNotANumber",
            Self::PriceNotGreaterThanZero => "PriceNotGreaterThanZero",
            Self::MissingQuantity => "MissingQuantity",
            Self::StockNotAnInteger => "StockNotAnInteger",
            Self::StockNotGreaterThanZero => "StockNotGreaterThanZero",
        }
    }

    /// The field this rule applies to.
    pub const fn field(self) -> ProductField {
        match self {
            Self::MissingName => ProductField::Name,
            Self::MissingPrice | Self::PriceNotANumber | Self::PriceNotGreaterThanZero => {
                ProductField::Price
            }
            Self::MissingQuantity | Self::StockNotAnInteger | Self::StockNotGreaterThanZero => {
                ProductField::Stock
            }
        }
    }

    fn holds(self, value: &str, separator: DecimalSeparator) -> bool {
        match self {
            Self::MissingName | Self::MissingPrice | Self::MissingQuantity => is_present(value),
            Self::PriceNotANumber => parse_price(value, separator).is_some(),
            Self::PriceNotGreaterThanZero => {
                parse_price(value, separator).is_some_and(|price| price > Decimal::ZERO)
            }
            Self::StockNotAnInteger => parse_integer(value).is_ok(),
            Self::StockNotGreaterThanZero => parse_integer(value).is_ok_and(|stock| stock > 0),
        }
    }
}

impl Display for ProductRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Check a submitted product against the rule table.
///
/// Returns the broken rules in table order; an empty result means the
/// submission is valid.
pub fn check_product(product: &ProductViewModel, separator: DecimalSeparator) -> ProductViolations {
    RULES
        .iter()
        .filter_map(|(field, rules)| {
            let value = field.value_of(product);

            rules
                .iter()
                .copied()
                .find(|rule| !rule.holds(value, separator))
        })
        .collect()
}

/// A price in the accepted format; values above [`MAX_PRICE`] are not prices.
pub fn parse_price(value: &str, separator: DecimalSeparator) -> Option<Decimal> {
    parse_decimal(value, separator, PRICE_FRACTION_DIGITS)
        .ok()
        .filter(|price| *price <= MAX_PRICE)
}
