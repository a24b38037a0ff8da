//! Order Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{carts::models::CartLine, products::models::ProductId},
    ids::TypedId,
};

/// Order Id
pub type OrderId = TypedId<Order>;

/// Order Line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl From<&CartLine> for OrderLine {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id(),
            quantity: line.quantity,
        }
    }
}

/// Order Model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub country: String,
    pub date: Timestamp,
    pub lines: Vec<OrderLine>,
}

/// New Order Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub country: String,
    pub date: Timestamp,
    pub lines: Vec<OrderLine>,
}

impl NewOrder {
    /// Attach an identifier.
    #[must_use]
    pub fn with_id(self, id: OrderId) -> Order {
        Order {
            id,
            name: self.name,
            address: self.address,
            city: self.city,
            zip: self.zip,
            country: self.country,
            date: self.date,
            lines: self.lines,
        }
    }
}

/// Order View Model
///
/// Shipping details as submitted at checkout. Lines come from the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderViewModel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub country: String,
}
