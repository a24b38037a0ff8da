//! Storefront configuration module

use clap::Args;

use crate::config::{observability::LoggingConfig, store::StoreConfig};

pub(crate) mod observability;
pub(crate) mod store;

pub(crate) use observability::LogFormat;

/// Settings shared by every command, read from flags or the environment.
#[derive(Debug, Args)]
pub(crate) struct StorefrontConfig {
    /// Catalog and display settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
