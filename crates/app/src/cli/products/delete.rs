use std::{io::Write, process::ExitCode};

use clap::Args;
use storefront::domain::{carts::SessionCart, products::models::ProductId};

use crate::cli::{CliError, Session};

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    /// Product identifier
    id: ProductId,
}

pub(crate) fn run<W: Write>(
    args: &DeleteProductArgs,
    session: &mut Session<'_, W>,
) -> Result<ExitCode, CliError> {
    // A CLI invocation has no session of its own, so the cart is empty.
    let mut cart = SessionCart::new();

    session.ctx.products.delete_product(args.id, &mut cart)?;
    session.persist_catalog()?;

    writeln!(session.out, "deleted product {}", args.id)?;

    Ok(ExitCode::SUCCESS)
}
