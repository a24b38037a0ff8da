//! Products service errors.

use std::{num::TryFromIntError, sync::PoisonError};

use thiserror::Error;

use crate::{
    domain::products::validation::{ProductRule, ProductViolations},
    validation::NumberError,
};

#[derive(Debug, Error)]
pub enum ProductsRepositoryError {
    #[error("product not found")]
    NotFound,

    #[error("product storage unavailable: {0}")]
    Unavailable(String),
}

impl<T> From<PoisonError<T>> for ProductsRepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        Self::Unavailable(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product not found")]
    NotFound,

    #[error("invalid product: {}", describe(.0))]
    Invalid(ProductViolations),

    #[error("invalid price value")]
    InvalidPrice(#[source] NumberError),

    #[error("invalid stock value")]
    InvalidStock(#[source] NumberError),

    #[error("stock value out of range")]
    StockOutOfRange(#[from] TryFromIntError),

    #[error(transparent)]
    Repository(ProductsRepositoryError),
}

impl From<ProductsRepositoryError> for ProductsServiceError {
    fn from(error: ProductsRepositoryError) -> Self {
        match error {
            ProductsRepositoryError::NotFound => Self::NotFound,
            ProductsRepositoryError::Unavailable(_) => Self::Repository(error),
        }
    }
}

fn describe(violations: &ProductViolations) -> String {
    violations
        .iter()
        .copied()
        .map(ProductRule::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
