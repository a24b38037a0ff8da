//! Cart items given on the command line as `<product id>:<quantity>`.

use std::str::FromStr;

use storefront::domain::{
    carts::{Cart, SessionCart},
    products::{ProductsService, ProductsServiceError, models::ProductId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CartItemArg {
    pub product: ProductId,
    pub quantity: u32,
}

impl FromStr for CartItemArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (product, quantity) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <product id>:<quantity>, got {s:?}"))?;

        let product = product
            .parse()
            .map_err(|error| format!("invalid product id {product:?}: {error}"))?;

        let quantity = quantity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or_else(|| format!("quantity must be a positive integer, got {quantity:?}"))?;

        Ok(Self { product, quantity })
    }
}

/// Fill a fresh session cart with the current catalog products.
pub(crate) fn build_cart(
    products: &dyn ProductsService,
    items: &[CartItemArg],
) -> Result<SessionCart, ProductsServiceError> {
    let mut cart = SessionCart::new();

    for item in items {
        let product = products.get_product(item.product)?;

        cart.add_item(&product, item.quantity);
    }

    Ok(cart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_id_and_quantity() {
        assert_eq!(
            "3:2".parse::<CartItemArg>(),
            Ok(CartItemArg {
                product: ProductId::new(3),
                quantity: 2
            })
        );
    }

    #[test]
    fn rejects_malformed_items() {
        for item in ["3", "x:1", "3:0", "3:-1", "3:a"] {
            assert!(item.parse::<CartItemArg>().is_err(), "{item:?} should be rejected");
        }
    }
}
