//! Storefront CLI

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing::error;

use crate::cli::Cli;

mod cli;
mod config;
mod observability;

pub fn main() -> ExitCode {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = observability::init(&cli.config.logging) {
        report(&error);

        return ExitCode::FAILURE;
    }

    let mut out = io::stdout().lock();

    let code = match cli.run(&mut out) {
        Ok(code) => code,
        Err(error) => {
            error!(%error, "command failed");
            report(&error);

            ExitCode::FAILURE
        }
    };

    if let Err(error) = out.flush() {
        report(&error);

        return ExitCode::FAILURE;
    }

    code
}

fn report(error: &dyn std::error::Error) {
    #[expect(
        clippy::print_stderr,
        reason = "errors go to stderr even when logging is filtered out"
    )]
    {
        eprintln!("error: {error}");
    }
}
