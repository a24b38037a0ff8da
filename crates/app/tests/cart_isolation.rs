//! Integration tests for catalog edits made while shoppers hold carts

use std::sync::Arc;

use rust_decimal::Decimal;
use testresult::TestResult;

use storefront::{
    catalog::Catalog,
    context::{AppContext, AppSettings},
    domain::{
        carts::{Cart, SessionCart},
        products::{
            CatalogProductsService, ProductsService,
            models::{Product, ProductId, ProductViewModel},
            repository::{InMemoryProductsRepository, ProductsRepository},
        },
    },
    validation::DecimalSeparator,
};

fn lamp() -> Product {
    Product {
        id: ProductId::new(1),
        name: "Desk lamp".to_string(),
        price: Decimal::new(1099, 2),
        quantity: 10,
        description: None,
        details: None,
    }
}

fn reduced_stock(separator: DecimalSeparator) -> ProductViewModel {
    ProductViewModel {
        id: Some(ProductId::new(1)),
        name: "Desk lamp".to_string(),
        price: match separator {
            DecimalSeparator::Period => "10.99".to_string(),
            DecimalSeparator::Comma => "10,99".to_string(),
        },
        stock: "2".to_string(),
        description: None,
        details: None,
    }
}

#[test]
fn reducing_stock_below_cart_quantity_leaves_cart_untouched() -> TestResult {
    let repository = Arc::new(InMemoryProductsRepository::with_products([lamp()]));
    let service = CatalogProductsService::new(repository.clone(), DecimalSeparator::Period);

    let mut cart = SessionCart::new();

    cart.add_item(&service.get_product(ProductId::new(1))?, 3);

    service.save_product(reduced_stock(DecimalSeparator::Period))?;

    let line = cart.find_product(ProductId::new(1));

    assert_eq!(line.map(|line| line.quantity), Some(3), "cart quantity changed");
    assert_eq!(cart.total_value(), Decimal::new(1099, 2) * Decimal::from(3));

    let stored = repository.get_product(ProductId::new(1))?;

    assert_eq!(stored.map(|product| product.quantity), Some(2));

    Ok(())
}

#[test]
fn comma_storefront_keeps_cart_snapshot_after_price_and_stock_edit() -> TestResult {
    let ctx = AppContext::from_catalog(
        Catalog::from_products(vec![lamp()]),
        AppSettings {
            separator: DecimalSeparator::Comma,
            ..AppSettings::default()
        },
    );

    let mut cart = SessionCart::new();

    cart.add_item(&ctx.products.get_product(ProductId::new(1))?, 3);

    ctx.products.save_product(ProductViewModel {
        price: "12,50".to_string(),
        ..reduced_stock(DecimalSeparator::Comma)
    })?;

    let stored = ctx.products.get_product(ProductId::new(1))?;

    assert_eq!(stored.price, Decimal::new(1250, 2));
    assert_eq!(stored.quantity, 2);

    let line = cart.find_product(ProductId::new(1));

    assert_eq!(
        line.map(|line| (line.product.price, line.quantity)),
        Some((Decimal::new(1099, 2), 3)),
        "cart line should keep the price and quantity it was added with"
    );
    assert_eq!(cart.total_value(), Decimal::new(3297, 2));

    Ok(())
}

#[test]
fn admin_and_shopper_listings_agree_after_an_edit() -> TestResult {
    let ctx = AppContext::from_catalog(
        Catalog::from_products(vec![lamp()]),
        AppSettings::default(),
    );

    ctx.products.save_product(ProductViewModel {
        id: None,
        name: "Notebook".to_string(),
        price: "4.5".to_string(),
        stock: "7".to_string(),
        description: Some("A5, dotted".to_string()),
        details: None,
    })?;

    let admin = ctx.products.list_view_models()?;
    let shopper = ctx.products.list_view_models()?;

    assert_eq!(admin, shopper);

    let names: Vec<_> = shopper.iter().map(|product| product.name.as_str()).collect();

    assert_eq!(names, ["Desk lamp", "Notebook"]);
    assert_eq!(
        shopper.last().map(|product| product.price.as_str()),
        Some("4.5")
    );

    Ok(())
}
