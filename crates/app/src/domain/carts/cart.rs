//! Session Cart

use mockall::automock;
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{
    carts::models::CartLine,
    products::models::{Product, ProductId},
};

#[automock]
pub trait Cart {
    /// Adds `quantity` units of `product`.
    ///
    /// The first addition stores a copy of the product; adding the same
    /// product again only increases the held quantity.
    fn add_item(&mut self, product: &Product, quantity: u32);

    /// Removes the line holding the given product, if any.
    fn remove_line(&mut self, product: ProductId);

    /// Empties the cart.
    fn clear(&mut self);

    /// All lines, in the order they were first added.
    fn lines(&self) -> Vec<CartLine>;

    /// The line holding the given product.
    fn find_product(&self, product: ProductId) -> Option<CartLine>;

    /// Sum of every line's snapshot price times quantity.
    fn total_value(&self) -> Decimal;

    /// Total value divided by the number of units held; zero when empty.
    fn average_value(&self) -> Decimal;
}

/// Cart kept for the lifetime of a shopper's session.
#[derive(Debug, Clone, Default)]
pub struct SessionCart {
    lines: Vec<CartLine>,
}

impl SessionCart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Cart for SessionCart {
    fn add_item(&mut self, product: &Product, quantity: u32) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id() == product.id)
        {
            line.quantity = line.quantity.saturating_add(quantity);

            debug!(product = %product.id, quantity = line.quantity, "increased cart line");

            return;
        }

        let line_id = self.lines.last().map_or(1, |line| line.line_id + 1);

        self.lines.push(CartLine {
            line_id,
            product: product.clone(),
            quantity,
        });

        debug!(product = %product.id, quantity, line_id, "added cart line");
    }

    fn remove_line(&mut self, product: ProductId) {
        self.lines.retain(|line| line.product_id() != product);
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn lines(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    fn find_product(&self, product: ProductId) -> Option<CartLine> {
        self.lines
            .iter()
            .find(|line| line.product_id() == product)
            .cloned()
    }

    fn total_value(&self) -> Decimal {
        self.lines
            .iter()
            .map(CartLine::value)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    fn average_value(&self) -> Decimal {
        let units: u64 = self.lines.iter().map(|line| u64::from(line.quantity)).sum();

        if units == 0 {
            return Decimal::ZERO;
        }

        self.total_value() / Decimal::from(units)
    }
}
