use std::{io::Write, process::ExitCode};

use clap::{Args, Subcommand};
use storefront::domain::products::models::{ProductId, ProductViewModel};

use super::{CliError, Session};

mod delete;
mod list;
mod save;
mod show;
mod validate;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    List(list::ListProductsArgs),
    Show(show::ShowProductArgs),
    Validate(validate::ValidateProductArgs),
    Save(save::SaveProductArgs),
    Delete(delete::DeleteProductArgs),
}

/// A product form as typed by an administrator.
#[derive(Debug, Clone, Args)]
pub(crate) struct ProductForm {
    /// Existing product to replace; a new product is created when omitted
    #[arg(long)]
    id: Option<ProductId>,

    /// Product name
    #[arg(long, default_value = "")]
    name: String,

    /// Unit price, written with the configured decimal separator
    #[arg(long, default_value = "")]
    price: String,

    /// Units in stock
    #[arg(long, default_value = "")]
    stock: String,

    /// Short description
    #[arg(long)]
    description: Option<String>,

    /// Long description
    #[arg(long)]
    details: Option<String>,
}

impl From<ProductForm> for ProductViewModel {
    fn from(form: ProductForm) -> Self {
        Self {
            id: form.id,
            name: form.name,
            price: form.price,
            stock: form.stock,
            description: form.description,
            details: form.details,
        }
    }
}

pub(crate) fn run<W: Write>(
    command: ProductsCommand,
    session: &mut Session<'_, W>,
) -> Result<ExitCode, CliError> {
    match command.command {
        ProductsSubcommand::List(args) => list::run(&args, session),
        ProductsSubcommand::Show(args) => show::run(&args, session),
        ProductsSubcommand::Validate(args) => validate::run(args, session),
        ProductsSubcommand::Save(args) => save::run(args, session),
        ProductsSubcommand::Delete(args) => delete::run(&args, session),
    }
}
