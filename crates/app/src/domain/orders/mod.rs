//! Orders

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

pub use errors::{OrdersRepositoryError, OrdersServiceError};
pub use service::*;
