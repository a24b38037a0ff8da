use std::{io::Write, process::ExitCode};

use clap::{Args, Subcommand};

use super::{CliError, Session};

mod show;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    Show(show::ShowCartArgs),
}

pub(crate) fn run<W: Write>(
    command: CartCommand,
    session: &mut Session<'_, W>,
) -> Result<ExitCode, CliError> {
    match command.command {
        CartSubcommand::Show(args) => show::run(&args, session),
    }
}
