//! Order validation rules.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use smallvec::SmallVec;

use crate::{domain::orders::models::OrderViewModel, validation::is_present};

/// Violations reported for one checkout submission.
pub type OrderViolations = SmallVec<[OrderRule; 5]>;

/// Order rule identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrderRule {
    MissingName,
    MissingAddress,
    MissingCity,
    MissingZipCode,
    MissingCountry,
}

impl OrderRule {
    /// Every rule, in reporting order.
    pub const ALL: [Self; 5] = [
        Self::MissingName,
        Self::MissingAddress,
        Self::MissingCity,
        Self::MissingZipCode,
        Self::MissingCountry,
    ];

    /// Stable identifier, used as the localization key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingName => "ErrorMissingName",
            Self::MissingAddress => "ErrorMissingAddress",
            Self::MissingCity => "ErrorMissingCity",
            Self::MissingZipCode => "ErrorMissingZipCode",
            Self::MissingCountry => "ErrorMissingCountry",
        }
    }

    fn value_of(self, order: &OrderViewModel) -> &str {
        match self {
            Self::MissingName => &order.name,
            Self::MissingAddress => &order.address,
            Self::MissingCity => &order.city,
            Self::MissingZipCode => &order.zip,
            Self::MissingCountry => &order.country,
        }
    }
}

impl Display for OrderRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Check checkout details; every field is required.
pub fn check_order(order: &OrderViewModel) -> OrderViolations {
    OrderRule::ALL
        .into_iter()
        .filter(|rule| !is_present(rule.value_of(order)))
        .collect()
}
