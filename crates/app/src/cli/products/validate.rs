use std::{io::Write, process::ExitCode};

use clap::Args;
use storefront::domain::products::{models::ProductViewModel, validation::ProductRule};

use super::ProductForm;
use crate::cli::{CliError, Session, output};

#[derive(Debug, Args)]
pub(crate) struct ValidateProductArgs {
    #[command(flatten)]
    form: ProductForm,
}

pub(crate) fn run<W: Write>(
    args: ValidateProductArgs,
    session: &mut Session<'_, W>,
) -> Result<ExitCode, CliError> {
    let product = ProductViewModel::from(args.form);
    let violations = session.ctx.products.validate(&product);

    if violations.is_empty() {
        writeln!(session.out, "product is valid")?;

        return Ok(ExitCode::SUCCESS);
    }

    output::write_violations(
        session.out,
        session.ctx.localizer.as_ref(),
        violations.iter().copied().map(ProductRule::as_str),
    )?;

    Ok(ExitCode::FAILURE)
}
