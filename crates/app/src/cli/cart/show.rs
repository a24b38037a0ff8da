use std::{io::Write, process::ExitCode};

use clap::Args;
use storefront::domain::carts::Cart;

use crate::cli::{
    CliError, Session,
    items::{self, CartItemArg},
    output,
};

#[derive(Debug, Args)]
pub(crate) struct ShowCartArgs {
    /// Cart item as `<product id>:<quantity>`; repeat for more items
    #[arg(long = "item", required = true)]
    items: Vec<CartItemArg>,
}

pub(crate) fn run<W: Write>(
    args: &ShowCartArgs,
    session: &mut Session<'_, W>,
) -> Result<ExitCode, CliError> {
    let cart = items::build_cart(session.ctx.products.as_ref(), &args.items)?;
    let currency = session.config.store.currency.currency();

    output::write_cart(session.out, &cart.lines(), currency)?;

    writeln!(
        session.out,
        "total: {}",
        output::money(cart.total_value(), currency)
    )?;
    writeln!(
        session.out,
        "average: {}",
        output::money(cart.average_value(), currency)
    )?;

    Ok(ExitCode::SUCCESS)
}
