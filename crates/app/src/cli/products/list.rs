use std::{io::Write, process::ExitCode};

use clap::Args;

use crate::cli::{CliError, Session, output};

#[derive(Debug, Args)]
pub(crate) struct ListProductsArgs {
    /// Print product view models as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub(crate) fn run<W: Write>(
    args: &ListProductsArgs,
    session: &mut Session<'_, W>,
) -> Result<ExitCode, CliError> {
    if args.json {
        let products = session.ctx.products.list_view_models()?;

        serde_json::to_writer_pretty(&mut *session.out, &products)?;
        writeln!(session.out)?;
    } else {
        let products = session.ctx.products.list_products()?;

        output::write_products(
            session.out,
            &products,
            session.config.store.currency.currency(),
        )?;
    }

    Ok(ExitCode::SUCCESS)
}
