//! Orders service errors.

use std::sync::PoisonError;

use thiserror::Error;

use crate::domain::{
    orders::validation::{OrderRule, OrderViolations},
    products::{ProductsServiceError, models::ProductId},
};

#[derive(Debug, Error)]
pub enum OrdersRepositoryError {
    #[error("order storage unavailable: {0}")]
    Unavailable(String),
}

impl<T> From<PoisonError<T>> for OrdersRepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        Self::Unavailable(error.to_string())
    }
}

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("invalid order: {}", describe(.0))]
    Invalid(OrderViolations),

    #[error("cart is empty")]
    EmptyCart,

    #[error("not enough stock for product {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: ProductId,
        requested: u32,
        available: u32,
    },

    #[error(transparent)]
    Products(#[from] ProductsServiceError),

    #[error(transparent)]
    Repository(#[from] OrdersRepositoryError),
}

fn describe(violations: &OrderViolations) -> String {
    violations
        .iter()
        .copied()
        .map(OrderRule::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
