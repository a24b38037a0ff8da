//! Store Config

use std::path::PathBuf;

use clap::Args;
use rusty_money::iso::{self, Currency};

use storefront::{
    context::AppSettings, localization::Language, validation::DecimalSeparator,
};

/// Currencies prices can be displayed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum CurrencyCode {
    Eur,
    Gbp,
    Usd,
}

impl CurrencyCode {
    pub(crate) fn currency(self) -> &'static Currency {
        match self {
            Self::Eur => iso::EUR,
            Self::Gbp => iso::GBP,
            Self::Usd => iso::USD,
        }
    }
}

/// Catalog and display settings.
#[derive(Debug, Args)]
pub(crate) struct StoreConfig {
    /// Catalog YAML file holding the products
    #[arg(long, env = "STOREFRONT_CATALOG", default_value = "catalog.yml", global = true)]
    pub catalog: PathBuf,

    /// Decimal separator accepted in submitted prices (period, comma)
    #[arg(
        long,
        env = "STOREFRONT_DECIMAL_SEPARATOR",
        value_enum,
        default_value_t = DecimalSeparator::Period,
        global = true
    )]
    pub decimal_separator: DecimalSeparator,

    /// Language for validation messages, by name or culture code (`fr-FR`);
    /// unknown values fall back to English
    #[arg(
        long,
        env = "STOREFRONT_LANGUAGE",
        default_value_t = Language::English,
        global = true
    )]
    pub language: Language,

    /// Currency prices are displayed in (eur, gbp, usd)
    #[arg(
        long,
        env = "STOREFRONT_CURRENCY",
        value_enum,
        default_value_t = CurrencyCode::Eur,
        global = true
    )]
    pub currency: CurrencyCode,
}

impl StoreConfig {
    pub(crate) fn settings(&self) -> AppSettings {
        AppSettings {
            separator: self.decimal_separator,
            language: self.language,
        }
    }
}
