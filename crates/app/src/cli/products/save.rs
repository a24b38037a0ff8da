use std::{io::Write, process::ExitCode};

use clap::Args;
use storefront::domain::products::{
    ProductsServiceError, models::ProductViewModel, validation::ProductRule,
};
use tracing::info;

use super::ProductForm;
use crate::cli::{CliError, Session, output};

#[derive(Debug, Args)]
pub(crate) struct SaveProductArgs {
    #[command(flatten)]
    form: ProductForm,
}

pub(crate) fn run<W: Write>(
    args: SaveProductArgs,
    session: &mut Session<'_, W>,
) -> Result<ExitCode, CliError> {
    let product = match session
        .ctx
        .products
        .save_product(ProductViewModel::from(args.form))
    {
        Ok(product) => product,
        Err(ProductsServiceError::Invalid(violations)) => {
            output::write_violations(
                session.out,
                session.ctx.localizer.as_ref(),
                violations.iter().copied().map(ProductRule::as_str),
            )?;

            return Ok(ExitCode::FAILURE);
        }
        Err(error) => return Err(error.into()),
    };

    session.persist_catalog()?;

    info!(product = %product.id, "catalog updated");

    writeln!(session.out, "saved product {}", product.id)?;

    Ok(ExitCode::SUCCESS)
}
