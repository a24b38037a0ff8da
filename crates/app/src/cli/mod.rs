use std::{io::Write, process::ExitCode};

use clap::{Parser, Subcommand};
use storefront::{catalog::Catalog, context::AppContext};

use crate::config::StorefrontConfig;

mod cart;
mod errors;
mod items;
mod orders;
mod output;
mod products;

pub(crate) use errors::CliError;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront catalog and cart CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub config: StorefrontConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Products(products::ProductsCommand),
    Cart(cart::CartCommand),
    Orders(orders::OrdersCommand),
}

/// Everything a command needs to run.
pub(crate) struct Session<'a, W> {
    pub ctx: AppContext,
    pub config: &'a StorefrontConfig,
    pub out: &'a mut W,
}

impl<W: Write> Session<'_, W> {
    /// Write the current products back to the catalog file.
    pub(crate) fn persist_catalog(&self) -> Result<(), CliError> {
        self.ctx.catalog_snapshot()?.save(&self.config.store.catalog)?;

        Ok(())
    }
}

impl Cli {
    pub(crate) fn run(self, out: &mut impl Write) -> Result<ExitCode, CliError> {
        let catalog = Catalog::load(&self.config.store.catalog)?;
        let ctx = AppContext::from_catalog(catalog, self.config.store.settings());

        let mut session = Session {
            ctx,
            config: &self.config,
            out,
        };

        match self.command {
            Commands::Products(command) => products::run(command, &mut session),
            Commands::Cart(command) => cart::run(command, &mut session),
            Commands::Orders(command) => orders::run(command, &mut session),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use storefront::catalog::Catalog;
    use tempfile::TempDir;
    use testresult::TestResult;

    use super::*;

    const CATALOG: &str = "products:
  - id: 1
    name: Desk lamp
    price: \"19.99\"
    quantity: 10
  - id: 2
    name: Notebook
    price: \"4.50\"
    quantity: 3
";

    fn catalog_dir() -> TestResult<TempDir> {
        let dir = tempfile::tempdir()?;

        fs::write(dir.path().join("catalog.yml"), CATALOG)?;

        Ok(dir)
    }

    fn run_cli(catalog: &Path, args: &[&str]) -> TestResult<(ExitCode, String)> {
        let catalog = catalog.to_string_lossy();
        let mut argv = vec!["storefront", "--catalog", catalog.as_ref()];

        argv.extend_from_slice(args);

        let mut out = Vec::new();
        let code = Cli::try_parse_from(argv)?.run(&mut out)?;

        Ok((code, String::from_utf8(out)?))
    }

    #[test]
    fn invalid_save_prints_localized_violations_and_keeps_catalog() -> TestResult {
        let dir = catalog_dir()?;
        let path = dir.path().join("catalog.yml");

        let (code, out) = run_cli(
            &path,
            &["--language", "french", "products", "save", "--price", "abc"],
        )?;

        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.contains("Veuillez saisir un nom"), "unexpected output: {out}");
        assert_eq!(fs::read_to_string(&path)?, CATALOG);

        Ok(())
    }

    #[test]
    fn language_accepts_culture_codes_and_falls_back_to_english() -> TestResult {
        let dir = catalog_dir()?;
        let path = dir.path().join("catalog.yml");

        for (language, message) in [
            ("fr-FR", "Veuillez saisir un nom"),
            ("es", "Por favor, introduzca un nombre"),
            ("klingon", "Please enter a name"),
        ] {
            let (code, out) = run_cli(
                &path,
                &["--language", language, "products", "validate", "--price", "1", "--stock", "1"],
            )?;

            assert_eq!(code, ExitCode::FAILURE);
            assert!(out.contains(message), "{language}: unexpected output: {out}");
        }

        Ok(())
    }

    #[test]
    fn save_writes_the_catalog_back() -> TestResult {
        let dir = catalog_dir()?;
        let path = dir.path().join("catalog.yml");

        let (code, _) = run_cli(
            &path,
            &[
                "products", "save", "--id", "2", "--name", "Notebook", "--price", "5", "--stock",
                "7",
            ],
        )?;

        assert_eq!(code, ExitCode::SUCCESS);

        let catalog = Catalog::load(&path)?;
        let notebook = catalog.products().iter().find(|product| product.id.get() == 2);

        assert_eq!(notebook.map(|product| product.quantity), Some(7));

        Ok(())
    }

    #[test]
    fn placing_an_order_decrements_persisted_stock() -> TestResult {
        let dir = catalog_dir()?;
        let path = dir.path().join("catalog.yml");

        let (code, out) = run_cli(
            &path,
            &[
                "orders", "place", "--item", "1:4", "--name", "Ada", "--address", "1 Main St",
                "--city", "Paris", "--zip", "75001", "--country", "France",
            ],
        )?;

        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.contains("order 1 placed"), "unexpected output: {out}");

        let catalog = Catalog::load(&path)?;
        let lamp = catalog.products().iter().find(|product| product.id.get() == 1);

        assert_eq!(lamp.map(|product| product.quantity), Some(6));

        Ok(())
    }

    #[test]
    fn unknown_product_in_cart_is_an_error() -> TestResult {
        let dir = catalog_dir()?;
        let path = dir.path().join("catalog.yml");

        let mut out = Vec::new();
        let result = Cli::try_parse_from([
            "storefront",
            "--catalog",
            path.to_string_lossy().as_ref(),
            "cart",
            "show",
            "--item",
            "9:1",
        ])?
        .run(&mut out);

        assert!(
            matches!(result, Err(CliError::Products(_))),
            "expected a products error, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn oversized_price_is_rejected_before_any_cart_is_built() -> TestResult {
        let dir = catalog_dir()?;
        let path = dir.path().join("catalog.yml");

        let (code, out) = run_cli(
            &path,
            &[
                "products",
                "save",
                "--id",
                "1",
                "--name",
                "Desk lamp",
                "--price",
                "79228162514264337593543950335",
                "--stock",
                "5",
            ],
        )?;

        assert_eq!(code, ExitCode::FAILURE);
        assert!(
            out.contains("The value entered for the price must be a number"),
            "unexpected output: {out}"
        );

        let (code, out) = run_cli(&path, &["cart", "show", "--item", "1:2"])?;

        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.contains("total:"), "unexpected output: {out}");

        Ok(())
    }

    #[test]
    fn list_json_uses_configured_separator() -> TestResult {
        let dir = catalog_dir()?;
        let path = dir.path().join("catalog.yml");

        let (_, out) = run_cli(
            &path,
            &["--decimal-separator", "comma", "products", "list", "--json"],
        )?;

        assert!(out.contains("\"19,99\""), "unexpected output: {out}");

        Ok(())
    }
}
