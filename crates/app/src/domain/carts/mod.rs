//! Carts

pub mod cart;
pub mod models;

pub use cart::*;
