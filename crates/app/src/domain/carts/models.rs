//! Cart Models

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::products::models::{Product, ProductId};

/// Cart Line
///
/// A copy of the product taken when it was first added, plus the quantity held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub line_id: usize,
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// The id of the product this line holds.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Snapshot price multiplied by quantity, saturating at [`Decimal::MAX`].
    pub fn value(&self) -> Decimal {
        self.product.price.saturating_mul(Decimal::from(self.quantity))
    }
}
