//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use crate::{
    catalog::Catalog,
    domain::{
        orders::{CheckoutOrdersService, OrdersService, repository::InMemoryOrdersRepository},
        products::{CatalogProductsService, ProductsService, ProductsServiceError},
    },
    localization::{CatalogLocalizer, Language, Localizer},
    validation::DecimalSeparator,
};

/// Storefront settings shared by every service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppSettings {
    /// Separator accepted in submitted prices.
    pub separator: DecimalSeparator,

    /// Language used for displayed messages.
    pub language: Language,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
    pub localizer: Arc<dyn Localizer>,
    pub settings: AppSettings,
}

impl AppContext {
    /// Build application context over an in-memory store seeded from a catalog.
    #[must_use]
    pub fn from_catalog(catalog: Catalog, settings: AppSettings) -> Self {
        let products: Arc<dyn ProductsService> = Arc::new(CatalogProductsService::new(
            Arc::new(catalog.into_repository()),
            settings.separator,
        ));

        Self {
            orders: Arc::new(CheckoutOrdersService::new(
                Arc::new(InMemoryOrdersRepository::new()),
                products.clone(),
            )),
            products,
            localizer: Arc::new(CatalogLocalizer::new(settings.language)),
            settings,
        }
    }

    /// The current products, ready to be written back to a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error when the product store cannot be read.
    pub fn catalog_snapshot(&self) -> Result<Catalog, ProductsServiceError> {
        Ok(Catalog::from_products(self.products.list_products()?))
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
