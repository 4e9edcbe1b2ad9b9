//! Domain core for the vitrine product catalog.
//!
//! Holds the concrete-row entity model, the filter/sort/pagination pipeline,
//! variant family resolution, the listing semantics shared by every backend,
//! the repository contract, and environment-driven configuration. No store
//! code lives here; backends depend on this crate, never the reverse.

use thiserror::Error;

/// Errors raised while loading application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

pub mod app_config;
pub mod categories;
pub mod config;
pub mod family;
pub mod listing;
pub mod product;
pub mod query;
pub mod repository;

pub use app_config::{AppConfig, CatalogBackend};
pub use config::{load_app_config, load_app_config_from_env};
pub use product::Product;
pub use query::{CatalogQuery, FilterState, Page, SortOrder};
pub use repository::CatalogRepository;
