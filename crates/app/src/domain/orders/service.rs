//! Orders service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use jiff::Timestamp;
use tracing::{info, instrument, warn};

use crate::domain::{
    carts::Cart,
    orders::{
        errors::OrdersServiceError,
        models::{NewOrder, Order, OrderId, OrderLine, OrderViewModel},
        repository::OrdersRepository,
        validation::{OrderViolations, check_order},
    },
    products::{ProductsService, ProductsServiceError},
};

pub trait OrdersService: Send + Sync {
    /// Checks checkout details against the order rules.
    fn validate(&self, order: &OrderViewModel) -> OrderViolations;

    /// Turns the cart into an order.
    ///
    /// The sold quantities are removed from the catalog stock in one update,
    /// then the order is recorded and the cart is emptied. Nothing is written
    /// when the details are invalid, the cart is empty, a line asks for more
    /// units than the catalog currently holds, or the stock update fails.
    fn place_order(
        &self,
        order: OrderViewModel,
        cart: &mut dyn Cart,
    ) -> Result<Order, OrdersServiceError>;

    /// Retrieve a single order.
    fn get_order(&self, id: OrderId) -> Result<Order, OrdersServiceError>;

    /// Retrieves all orders, oldest first.
    fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;
}

/// Orders service that checks carts out against the catalog.
#[derive(Clone)]
pub struct CheckoutOrdersService {
    repository: Arc<dyn OrdersRepository>,
    products: Arc<dyn ProductsService>,
}

impl CheckoutOrdersService {
    #[must_use]
    pub fn new(repository: Arc<dyn OrdersRepository>, products: Arc<dyn ProductsService>) -> Self {
        Self {
            repository,
            products,
        }
    }

    fn check_stock(&self, lines: &[OrderLine]) -> Result<(), OrdersServiceError> {
        for line in lines {
            let available = match self.products.get_product(line.product_id) {
                Ok(product) => product.quantity,
                Err(ProductsServiceError::NotFound) => 0,
                Err(error) => return Err(error.into()),
            };

            if line.quantity > available {
                return Err(OrdersServiceError::InsufficientStock {
                    product: line.product_id,
                    requested: line.quantity,
                    available,
                });
            }
        }

        Ok(())
    }
}

impl Debug for CheckoutOrdersService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CheckoutOrdersService").finish_non_exhaustive()
    }
}

impl OrdersService for CheckoutOrdersService {
    fn validate(&self, order: &OrderViewModel) -> OrderViolations {
        check_order(order)
    }

    #[instrument(skip_all)]
    fn place_order(
        &self,
        order: OrderViewModel,
        cart: &mut dyn Cart,
    ) -> Result<Order, OrdersServiceError> {
        let violations = self.validate(&order);

        if !violations.is_empty() {
            warn!(?violations, "rejected order submission");

            return Err(OrdersServiceError::Invalid(violations));
        }

        let lines: Vec<OrderLine> = cart.lines().iter().map(OrderLine::from).collect();

        if lines.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        if let Err(error) = self.check_stock(&lines) {
            warn!(%error, "rejected order");

            return Err(error);
        }

        self.products.update_product_quantities(cart)?;

        let saved = self.repository.save_order(NewOrder {
            name: order.name.trim().to_string(),
            address: order.address.trim().to_string(),
            city: order.city.trim().to_string(),
            zip: order.zip.trim().to_string(),
            country: order.country.trim().to_string(),
            date: Timestamp::now(),
            lines,
        })?;

        cart.clear();

        info!(order = %saved.id, lines = saved.lines.len(), "placed order");

        Ok(saved)
    }

    fn get_order(&self, id: OrderId) -> Result<Order, OrdersServiceError> {
        self.repository
            .get_order(id)?
            .ok_or(OrdersServiceError::NotFound)
    }

    fn list_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        Ok(self.repository.get_orders()?)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::{
            carts::SessionCart,
            orders::{repository::MockOrdersRepository, validation::OrderRule},
            products::{
                CatalogProductsService,
                errors::ProductsRepositoryError,
                models::{Product, ProductId},
                repository::MockProductsRepository,
            },
        },
        test::TestContext,
        validation::DecimalSeparator,
    };

    use super::*;

    fn shipping() -> OrderViewModel {
        OrderViewModel {
            name: "Ada".to_string(),
            address: "1 Loop Road".to_string(),
            city: "Paris".to_string(),
            zip: "75001".to_string(),
            country: "France".to_string(),
        }
    }

    #[test]
    fn place_order_records_lines_updates_stock_and_clears_cart() -> TestResult {
        let ctx = TestContext::new();
        let lamp = ctx.create_product("Lamp", Decimal::new(1099, 2), 10)?;
        let desk = ctx.create_product("Desk", Decimal::new(150, 0), 2)?;

        let mut cart = SessionCart::new();

        cart.add_item(&lamp, 3);
        cart.add_item(&desk, 2);

        let before = Timestamp::now();
        let order = ctx.orders.place_order(shipping(), &mut cart)?;

        assert_eq!(
            order.lines,
            [
                OrderLine {
                    product_id: lamp.id,
                    quantity: 3
                },
                OrderLine {
                    product_id: desk.id,
                    quantity: 2
                },
            ]
        );
        assert!(order.date >= before, "order should be stamped at checkout");
        assert!(cart.is_empty(), "cart should be cleared");
        assert_eq!(ctx.products.get_product(lamp.id)?.quantity, 7);
        assert!(
            matches!(
                ctx.products.get_product(desk.id),
                Err(ProductsServiceError::NotFound)
            ),
            "sold out product should leave the catalog"
        );
        assert_eq!(ctx.orders.get_order(order.id)?, order);

        Ok(())
    }

    #[test]
    fn invalid_details_write_nothing() -> TestResult {
        let ctx = TestContext::new();
        let lamp = ctx.create_product("Lamp", Decimal::ONE, 10)?;
        let mut cart = SessionCart::new();

        cart.add_item(&lamp, 1);

        let result = ctx.orders.place_order(
            OrderViewModel {
                zip: String::new(),
                ..shipping()
            },
            &mut cart,
        );

        assert!(
            matches!(
                &result,
                Err(OrdersServiceError::Invalid(violations))
                    if violations.as_slice() == [OrderRule::MissingZipCode]
            ),
            "expected Invalid, got {result:?}"
        );
        assert!(!cart.is_empty(), "cart should be kept");
        assert!(ctx.orders.list_orders()?.is_empty());

        Ok(())
    }

    #[test]
    fn empty_cart_is_rejected() {
        let ctx = TestContext::new();
        let mut cart = SessionCart::new();

        let result = ctx.orders.place_order(shipping(), &mut cart);

        assert!(
            matches!(result, Err(OrdersServiceError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
    }

    #[test]
    fn cart_line_above_current_stock_is_rejected() -> TestResult {
        let ctx = TestContext::new();
        let lamp = ctx.create_product("Lamp", Decimal::new(1099, 2), 10)?;
        let mut cart = SessionCart::new();

        cart.add_item(&lamp, 3);
        ctx.set_stock(&lamp, 2)?;

        let result = ctx.orders.place_order(shipping(), &mut cart);

        assert!(
            matches!(
                result,
                Err(OrdersServiceError::InsufficientStock {
                    requested: 3,
                    available: 2,
                    ..
                })
            ),
            "expected InsufficientStock, got {result:?}"
        );
        assert_eq!(ctx.products.get_product(lamp.id)?.quantity, 2);
        assert_eq!(cart.find_product(lamp.id).map(|line| line.quantity), Some(3));

        Ok(())
    }

    #[test]
    fn deleted_product_cannot_be_checked_out() {
        let ctx = TestContext::new();
        let ghost = Product {
            id: ProductId::new(404),
            name: "Ghost".to_string(),
            price: Decimal::ONE,
            quantity: 1,
            description: None,
            details: None,
        };
        let mut cart = SessionCart::new();

        cart.add_item(&ghost, 1);

        let result = ctx.orders.place_order(shipping(), &mut cart);

        assert!(
            matches!(
                result,
                Err(OrdersServiceError::InsufficientStock { available: 0, .. })
            ),
            "expected InsufficientStock, got {result:?}"
        );
    }

    #[test]
    fn failed_stock_update_records_no_order() {
        let mut products = MockProductsRepository::new();

        products.expect_get_product().returning(|id| {
            Ok(Some(Product {
                id,
                name: "Lamp".to_string(),
                price: Decimal::ONE,
                quantity: 10,
                description: None,
                details: None,
            }))
        });
        products
            .expect_update_product_stocks()
            .once()
            .returning(|_| Err(ProductsRepositoryError::Unavailable("offline".to_string())));

        let mut orders = MockOrdersRepository::new();

        orders.expect_save_order().never();

        let service = CheckoutOrdersService::new(
            Arc::new(orders),
            Arc::new(CatalogProductsService::new(
                Arc::new(products),
                DecimalSeparator::Period,
            )),
        );

        let mut cart = SessionCart::new();

        cart.add_item(
            &Product {
                id: ProductId::new(1),
                name: "Lamp".to_string(),
                price: Decimal::ONE,
                quantity: 10,
                description: None,
                details: None,
            },
            2,
        );

        let result = service.place_order(shipping(), &mut cart);

        assert!(
            matches!(result, Err(OrdersServiceError::Products(_))),
            "expected a products error, got {result:?}"
        );
        assert_eq!(cart.lines().len(), 1, "cart should be kept");
    }

    #[test]
    fn unknown_order_is_not_found() {
        let mut repository = MockOrdersRepository::new();

        repository.expect_get_order().returning(|_| Ok(None));

        let ctx = TestContext::new();
        let service = CheckoutOrdersService::new(Arc::new(repository), ctx.products.clone());

        let result = service.get_order(OrderId::new(1));

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
