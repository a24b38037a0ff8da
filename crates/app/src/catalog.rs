//! Catalog Files
//!
//! A catalog file is a YAML list of products used to seed and snapshot the
//! in-memory product store:
//!
//! ```yaml
//! products:
//!   - id: 1
//!     name: Desk lamp
//!     price: "19.99"
//!     quantity: 10
//!     description: Adjustable arm
//! ```
//!
//! Prices are always written with a period, whatever separator the
//! storefront accepts from users.

use std::{fs, path::Path};

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::products::{
        models::{Product, ProductId},
        repository::InMemoryProductsRepository,
        validation::parse_price,
    },
    validation::{DecimalSeparator, format_decimal},
};

/// Catalog file errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading or writing the catalog file
    #[error("failed to access catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Price is not a positive decimal
    #[error("invalid price for product {id}: {price:?}")]
    InvalidPrice { id: ProductId, price: String },

    /// The same id appears twice
    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<CatalogEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogEntry {
    id: ProductId,
    name: String,
    price: String,
    quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl TryFrom<CatalogEntry> for Product {
    type Error = CatalogError;

    fn try_from(entry: CatalogEntry) -> Result<Self, Self::Error> {
        let price = parse_price(&entry.price, DecimalSeparator::Period)
            .filter(|price| *price > Decimal::ZERO)
            .ok_or_else(|| CatalogError::InvalidPrice {
                id: entry.id,
                price: entry.price.clone(),
            })?;

        Ok(Self {
            id: entry.id,
            name: entry.name,
            price,
            quantity: entry.quantity,
            description: entry.description,
            details: entry.details,
        })
    }
}

impl From<&Product> for CatalogEntry {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: format_decimal(product.price, DecimalSeparator::Period),
            quantity: product.quantity,
            description: product.description.clone(),
            details: product.details.clone(),
        }
    }
}

/// Products loaded from, or about to be written to, a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products, ordered by id.
    #[must_use]
    pub fn from_products(mut products: Vec<Product>) -> Self {
        products.sort_by_key(|product| product.id);

        Self { products }
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds an
    /// invalid product.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parse catalog YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, a price is not a positive
    /// decimal, or an id is repeated.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_norway::from_str(yaml)?;
        let mut seen = FxHashSet::default();
        let mut products = Vec::with_capacity(file.products.len());

        for entry in file.products {
            if !seen.insert(entry.id) {
                return Err(CatalogError::DuplicateProduct(entry.id));
            }

            products.push(Product::try_from(entry)?);
        }

        Ok(Self::from_products(products))
    }

    /// Render the catalog as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_yaml(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            products: self.products.iter().map(CatalogEntry::from).collect(),
        };

        Ok(serde_norway::to_string(&file)?)
    }

    /// Write the catalog file, replacing any existing contents.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or the write fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        fs::write(path, self.to_yaml()?)?;

        Ok(())
    }

    /// Products, ordered by id.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Seed an in-memory product store.
    #[must_use]
    pub fn into_repository(self) -> InMemoryProductsRepository {
        InMemoryProductsRepository::with_products(self.products)
    }
}
