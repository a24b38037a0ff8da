use std::io;

use storefront::{
    catalog::CatalogError,
    domain::{orders::OrdersServiceError, products::ProductsServiceError},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Products(#[from] ProductsServiceError),

    #[error(transparent)]
    Orders(#[from] OrdersServiceError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}
