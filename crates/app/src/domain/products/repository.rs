//! Products Repository

use std::{collections::BTreeMap, sync::RwLock};

use mockall::automock;

use crate::domain::products::{
    errors::ProductsRepositoryError,
    models::{NewProduct, Product, ProductId},
};

#[automock]
pub trait ProductsRepository: Send + Sync {
    /// Retrieves all products, ordered by id.
    fn get_all_products(&self) -> Result<Vec<Product>, ProductsRepositoryError>;

    /// Retrieve a single product.
    fn get_product(&self, id: ProductId) -> Result<Option<Product>, ProductsRepositoryError>;

    /// Persists a product, inserting it when `id` is `None` and replacing the
    /// stored record otherwise.
    fn save_product(
        &self,
        id: Option<ProductId>,
        product: NewProduct,
    ) -> Result<Product, ProductsRepositoryError>;

    /// Removes sold units from the stock of each listed product.
    ///
    /// Either every product is updated or none is: an unknown id fails the
    /// whole call. Stock never goes below zero; a product left with no stock
    /// is removed.
    fn update_product_stocks(
        &self,
        sold: &[(ProductId, u32)],
    ) -> Result<(), ProductsRepositoryError>;

    /// Deletes a product with the given id.
    fn delete_product(&self, id: ProductId) -> Result<(), ProductsRepositoryError>;
}

#[derive(Debug, Default)]
struct CatalogState {
    products: BTreeMap<ProductId, Product>,
    last_id: u64,
}

/// Products held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryProductsRepository {
    state: RwLock<CatalogState>,
}

impl InMemoryProductsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing products, keeping their ids.
    ///
    /// New products are numbered after the highest seeded id.
    #[must_use]
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products: BTreeMap<ProductId, Product> = products
            .into_iter()
            .map(|product| (product.id, product))
            .collect();

        let last_id = products.keys().next_back().map_or(0, |id| id.get());

        Self {
            state: RwLock::new(CatalogState { products, last_id }),
        }
    }
}

impl ProductsRepository for InMemoryProductsRepository {
    fn get_all_products(&self) -> Result<Vec<Product>, ProductsRepositoryError> {
        let state = self.state.read()?;

        Ok(state.products.values().cloned().collect())
    }

    fn get_product(&self, id: ProductId) -> Result<Option<Product>, ProductsRepositoryError> {
        let state = self.state.read()?;

        Ok(state.products.get(&id).cloned())
    }

    fn save_product(
        &self,
        id: Option<ProductId>,
        product: NewProduct,
    ) -> Result<Product, ProductsRepositoryError> {
        let mut state = self.state.write()?;

        let id = match id {
            Some(id) if state.products.contains_key(&id) => id,
            Some(_) => return Err(ProductsRepositoryError::NotFound),
            None => {
                state.last_id += 1;

                ProductId::new(state.last_id)
            }
        };

        let saved = product.with_id(id);

        state.products.insert(id, saved.clone());

        Ok(saved)
    }

    fn update_product_stocks(
        &self,
        sold: &[(ProductId, u32)],
    ) -> Result<(), ProductsRepositoryError> {
        let mut state = self.state.write()?;

        if sold.iter().any(|(id, _)| !state.products.contains_key(id)) {
            return Err(ProductsRepositoryError::NotFound);
        }

        for (id, quantity_to_remove) in sold {
            if let Some(product) = state.products.get_mut(id) {
                product.quantity = product.quantity.saturating_sub(*quantity_to_remove);

                if product.quantity == 0 {
                    state.products.remove(id);
                }
            }
        }

        Ok(())
    }

    fn delete_product(&self, id: ProductId) -> Result<(), ProductsRepositoryError> {
        let mut state = self.state.write()?;

        state
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or(ProductsRepositoryError::NotFound)
    }
}
