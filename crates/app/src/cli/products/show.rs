use std::{io::Write, process::ExitCode};

use clap::Args;
use storefront::domain::products::models::ProductId;

use crate::cli::{CliError, Session};

#[derive(Debug, Args)]
pub(crate) struct ShowProductArgs {
    /// Product identifier
    id: ProductId,
}

pub(crate) fn run<W: Write>(
    args: &ShowProductArgs,
    session: &mut Session<'_, W>,
) -> Result<ExitCode, CliError> {
    let product = session.ctx.products.get_view_model(args.id)?;

    serde_json::to_writer_pretty(&mut *session.out, &product)?;
    writeln!(session.out)?;

    Ok(ExitCode::SUCCESS)
}
