use std::{io::Write, process::ExitCode};

use clap::Args;
use storefront::domain::{
    carts::Cart,
    orders::{OrdersServiceError, models::OrderViewModel, validation::OrderRule},
};
use tracing::info;

use crate::cli::{
    CliError, Session,
    items::{self, CartItemArg},
    output,
};

#[derive(Debug, Args)]
pub(crate) struct PlaceOrderArgs {
    /// Cart item as `<product id>:<quantity>`; repeat for more items
    #[arg(long = "item", required = true)]
    items: Vec<CartItemArg>,

    /// Recipient name
    #[arg(long, default_value = "")]
    name: String,

    /// Street address
    #[arg(long, default_value = "")]
    address: String,

    #[arg(long, default_value = "")]
    city: String,

    /// Zip or postal code
    #[arg(long, default_value = "")]
    zip: String,

    #[arg(long, default_value = "")]
    country: String,
}

pub(crate) fn run<W: Write>(
    args: PlaceOrderArgs,
    session: &mut Session<'_, W>,
) -> Result<ExitCode, CliError> {
    let mut cart = items::build_cart(session.ctx.products.as_ref(), &args.items)?;
    let currency = session.config.store.currency.currency();
    let total = cart.total_value();

    let details = OrderViewModel {
        name: args.name,
        address: args.address,
        city: args.city,
        zip: args.zip,
        country: args.country,
    };

    let order = match session.ctx.orders.place_order(details, &mut cart) {
        Ok(order) => order,
        Err(OrdersServiceError::Invalid(violations)) => {
            output::write_violations(
                session.out,
                session.ctx.localizer.as_ref(),
                violations.iter().copied().map(OrderRule::as_str),
            )?;

            return Ok(ExitCode::FAILURE);
        }
        Err(error) => return Err(error.into()),
    };

    session.persist_catalog()?;

    info!(order = %order.id, lines = order.lines.len(), "order placed");

    writeln!(session.out, "order {} placed on {}", order.id, order.date)?;
    writeln!(session.out, "ship to: {}, {}", order.name, order.address)?;
    writeln!(session.out, "         {} {}, {}", order.zip, order.city, order.country)?;
    writeln!(session.out, "total: {}", output::money(total, currency))?;

    Ok(ExitCode::SUCCESS)
}
