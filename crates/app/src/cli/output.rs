//! Terminal rendering of products, carts and violations.

use std::io::{self, Write};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use storefront::{
    domain::{carts::models::CartLine, products::models::Product},
    localization::Localizer,
};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

/// Render an amount in the configured currency.
pub(crate) fn money(amount: Decimal, currency: &'static Currency) -> String {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| minor.round_dp(0).to_i64())
        .map_or_else(
            || amount.to_string(),
            |minor| Money::from_minor(minor, currency).to_string(),
        )
}

pub(crate) fn write_products(
    out: &mut impl Write,
    products: &[Product],
    currency: &'static Currency,
) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Price", "Stock", "Description"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            money(product.price, currency),
            product.quantity.to_string(),
            product.description.clone().unwrap_or_default(),
        ]);
    }

    let mut table = builder.build();

    table
        .with(Style::modern_rounded())
        .modify(Columns::new(2..4), Alignment::right());

    writeln!(out, "{table}")
}

pub(crate) fn write_cart(
    out: &mut impl Write,
    lines: &[CartLine],
    currency: &'static Currency,
) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Line", "Product", "Unit price", "Quantity", "Value"]);

    for line in lines {
        builder.push_record([
            line.line_id.to_string(),
            line.product.name.clone(),
            money(line.product.price, currency),
            line.quantity.to_string(),
            money(line.value(), currency),
        ]);
    }

    let mut table = builder.build();

    table
        .with(Style::modern_rounded())
        .modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "{table}")
}

/// One localized message per rule identifier.
pub(crate) fn write_violations<'a>(
    out: &mut impl Write,
    localizer: &dyn Localizer,
    keys: impl IntoIterator<Item = &'a str>,
) -> io::Result<()> {
    for key in keys {
        writeln!(out, "- {}", localizer.localize(key))?;
    }

    Ok(())
}
