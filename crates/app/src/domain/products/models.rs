//! Product Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    ids::TypedId,
    validation::{DecimalSeparator, format_decimal},
};

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub description: Option<String>,
    pub details: Option<String>,
}

/// New Product Model
///
/// Typed product data ready to be persisted, without an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub description: Option<String>,
    pub details: Option<String>,
}

impl NewProduct {
    /// Attach an identifier.
    #[must_use]
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
            description: self.description,
            details: self.details,
        }
    }
}

impl From<Product> for NewProduct {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
            quantity: product.quantity,
            description: product.description,
            details: product.details,
        }
    }
}

/// Product View Model
///
/// A product as submitted by, or shown to, a user. Price and stock stay text
/// until they pass validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductViewModel {
    /// `None` for a product that has not been saved yet.
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub stock: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl ProductViewModel {
    /// Render a stored product, writing the price with `separator`.
    #[must_use]
    pub fn from_product(product: &Product, separator: DecimalSeparator) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            price: format_decimal(product.price, separator),
            stock: product.quantity.to_string(),
            description: product.description.clone(),
            details: product.details.clone(),
        }
    }
}
