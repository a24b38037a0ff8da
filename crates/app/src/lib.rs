//! Storefront product administration and cart core.
//!
//! Products are validated and saved by an administrator, listed for
//! shoppers, and copied into session carts. A cart line keeps the product as
//! it was when added, so later catalog edits never change what a shopper
//! already holds.

pub mod catalog;
pub mod context;
pub mod domain;
pub mod ids;
pub mod localization;
pub mod validation;

#[cfg(test)]
mod test;
