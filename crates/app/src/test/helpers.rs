//! Test Helpers

use crate::domain::products::models::ProductViewModel;

/// A new product submission with the given text fields.
pub(crate) fn submission(name: &str, price: &str, stock: &str) -> ProductViewModel {
    ProductViewModel {
        name: name.to_string(),
        price: price.to_string(),
        stock: stock.to_string(),
        ..ProductViewModel::default()
    }
}
