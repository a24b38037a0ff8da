//! Products

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;

pub use errors::{ProductsRepositoryError, ProductsServiceError};
pub use service::*;
