use std::{io::Write, process::ExitCode};

use clap::{Args, Subcommand};

use super::{CliError, Session};

mod place;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    Place(place::PlaceOrderArgs),
}

pub(crate) fn run<W: Write>(
    command: OrdersCommand,
    session: &mut Session<'_, W>,
) -> Result<ExitCode, CliError> {
    match command.command {
        OrdersSubcommand::Place(args) => place::run(args, session),
    }
}
