//! Products service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tracing::{debug, info, instrument, warn};

use crate::{
    domain::{
        carts::Cart,
        products::{
            errors::ProductsServiceError,
            models::{NewProduct, Product, ProductId, ProductViewModel},
            repository::ProductsRepository,
            validation::{PRICE_FRACTION_DIGITS, ProductViolations, check_product},
        },
    },
    validation::{DecimalSeparator, parse_decimal, parse_integer},
};

pub trait ProductsService: Send + Sync {
    /// Retrieves all products, ordered by id.
    fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieves all products as view models.
    fn list_view_models(&self) -> Result<Vec<ProductViewModel>, ProductsServiceError>;

    /// Retrieve a single product.
    fn get_product(&self, id: ProductId) -> Result<Product, ProductsServiceError>;

    /// Retrieve a single product as a view model.
    fn get_view_model(&self, id: ProductId) -> Result<ProductViewModel, ProductsServiceError>;

    /// Checks a submission against the product rules.
    fn validate(&self, product: &ProductViewModel) -> ProductViolations;

    /// Validates, converts and persists a submission.
    ///
    /// Nothing is written when the submission breaks a rule. Carts are
    /// never read or changed.
    fn save_product(&self, product: ProductViewModel) -> Result<Product, ProductsServiceError>;

    /// Deletes the product from the catalog, then removes its line from `cart`.
    ///
    /// The cart is left alone when the delete fails.
    fn delete_product(
        &self,
        id: ProductId,
        cart: &mut dyn Cart,
    ) -> Result<(), ProductsServiceError>;

    /// Subtracts every line of a checked-out cart from the persisted stock.
    ///
    /// All lines are applied together; on error no stock has changed.
    fn update_product_quantities(&self, cart: &dyn Cart) -> Result<(), ProductsServiceError>;
}

/// Products service backed by a [`ProductsRepository`].
#[derive(Clone)]
pub struct CatalogProductsService {
    repository: Arc<dyn ProductsRepository>,
    separator: DecimalSeparator,
}

impl CatalogProductsService {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>, separator: DecimalSeparator) -> Self {
        Self {
            repository,
            separator,
        }
    }

    fn convert(&self, product: ProductViewModel) -> Result<NewProduct, ProductsServiceError> {
        let price = parse_decimal(&product.price, self.separator, PRICE_FRACTION_DIGITS)
            .map_err(ProductsServiceError::InvalidPrice)?;

        let stock = parse_integer(&product.stock).map_err(ProductsServiceError::InvalidStock)?;

        Ok(NewProduct {
            name: product.name.trim().to_string(),
            price,
            quantity: u32::try_from(stock)?,
            description: non_blank(product.description),
            details: non_blank(product.details),
        })
    }
}

impl Debug for CatalogProductsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CatalogProductsService")
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}

impl ProductsService for CatalogProductsService {
    fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        Ok(self.repository.get_all_products()?)
    }

    fn list_view_models(&self) -> Result<Vec<ProductViewModel>, ProductsServiceError> {
        Ok(self
            .list_products()?
            .iter()
            .map(|product| ProductViewModel::from_product(product, self.separator))
            .collect())
    }

    fn get_product(&self, id: ProductId) -> Result<Product, ProductsServiceError> {
        self.repository
            .get_product(id)?
            .ok_or(ProductsServiceError::NotFound)
    }

    fn get_view_model(&self, id: ProductId) -> Result<ProductViewModel, ProductsServiceError> {
        let product = self.get_product(id)?;

        Ok(ProductViewModel::from_product(&product, self.separator))
    }

    fn validate(&self, product: &ProductViewModel) -> ProductViolations {
        let violations = check_product(product, self.separator);

        debug!(?violations, "validated product submission");

        violations
    }

    #[instrument(skip_all, fields(product = ?product.id))]
    fn save_product(&self, product: ProductViewModel) -> Result<Product, ProductsServiceError> {
        let violations = self.validate(&product);

        if !violations.is_empty() {
            warn!(?violations, "rejected product submission");

            return Err(ProductsServiceError::Invalid(violations));
        }

        let id = product.id;
        let saved = self.repository.save_product(id, self.convert(product)?)?;

        info!(product = %saved.id, quantity = saved.quantity, "saved product");

        Ok(saved)
    }

    #[instrument(skip(self, cart))]
    fn delete_product(
        &self,
        id: ProductId,
        cart: &mut dyn Cart,
    ) -> Result<(), ProductsServiceError> {
        self.repository.delete_product(id)?;

        cart.remove_line(id);

        info!(product = %id, "deleted product");

        Ok(())
    }

    #[instrument(skip_all)]
    fn update_product_quantities(&self, cart: &dyn Cart) -> Result<(), ProductsServiceError> {
        let sold: Vec<(ProductId, u32)> = cart
            .lines()
            .iter()
            .map(|line| (line.product_id(), line.quantity))
            .collect();

        self.repository.update_product_stocks(&sold)?;

        debug!(lines = sold.len(), "updated stock");

        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
