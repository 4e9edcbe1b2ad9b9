//! Process-wide backend selection.
//!
//! The repository is chosen once from configuration and the same handle is
//! shared for the life of the process. Any failure along the way (unreadable
//! configuration, missing `DATABASE_URL`, an unparseable connection string)
//! is logged and answered with the built-in fixture catalog, so callers
//! never see a fallible surface.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::error;
use vitrine_core::{AppConfig, CatalogBackend, CatalogRepository};
use vitrine_db::{connect_pool_lazy, DbError, PgCatalog, PoolConfig};

use crate::memory::InMemoryCatalog;

static CATALOG: OnceCell<Arc<dyn CatalogRepository>> = OnceCell::const_new();

/// The shared catalog handle, constructed from the environment on first use.
pub async fn catalog() -> Arc<dyn CatalogRepository> {
    CATALOG
        .get_or_init(|| async { build_from_environment() })
        .await
        .clone()
}

fn build_from_environment() -> Arc<dyn CatalogRepository> {
    match vitrine_core::load_app_config() {
        Ok(config) => from_config(&config),
        Err(error) => {
            error!(error = %error, "configuration unreadable, serving the fixture catalog");
            fixture_repository()
        }
    }
}

/// Build the repository a configuration asks for.
///
/// A Postgres backend that cannot be constructed degrades to the fixture
/// catalog rather than failing; an unreachable (but well-formed) server is
/// not detected here, since pools connect lazily.
#[must_use]
pub fn from_config(config: &AppConfig) -> Arc<dyn CatalogRepository> {
    match config.backend {
        CatalogBackend::Memory => fixture_repository(),
        CatalogBackend::Postgres => postgres_repository(config).unwrap_or_else(|error| {
            error!(error = %error, "postgres catalog unavailable, serving the fixture catalog");
            fixture_repository()
        }),
    }
}

fn fixture_repository() -> Arc<dyn CatalogRepository> {
    Arc::new(InMemoryCatalog::with_fixture_catalog())
}

fn postgres_repository(config: &AppConfig) -> Result<Arc<dyn CatalogRepository>, DbError> {
    let url = config
        .database_url
        .as_deref()
        .ok_or(DbError::MissingDatabaseUrl)?;
    let pool = connect_pool_lazy(url, PoolConfig::from_app_config(config))?;
    Ok(Arc::new(PgCatalog::new(pool)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(backend: CatalogBackend, database_url: Option<&str>) -> AppConfig {
        AppConfig {
            backend,
            database_url: database_url.map(ToString::to_string),
            log_level: "info".to_string(),
            db_max_connections: 5,
            db_min_connections: 1,
            db_acquire_timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn memory_backend_serves_the_fixture_catalog() {
        let repo = from_config(&make_config(CatalogBackend::Memory, None));

        let families = repo.list_all_products().await;
        assert_eq!(families.len(), 15);
        assert!(families.iter().any(|p| p.id == "w-margaux-olive"));
    }

    #[tokio::test]
    async fn postgres_without_a_url_falls_back_to_fixtures() {
        let repo = from_config(&make_config(CatalogBackend::Postgres, None));

        assert_eq!(repo.list_all_products().await.len(), 15);
    }

    #[tokio::test]
    async fn an_unparseable_database_url_falls_back_to_fixtures() {
        let repo = from_config(&make_config(CatalogBackend::Postgres, Some("not-a-url")));

        assert_eq!(repo.list_all_products().await.len(), 15);
    }

    #[tokio::test]
    async fn the_shared_handle_is_constructed_once() {
        let first = catalog().await;
        let second = catalog().await;

        assert!(Arc::ptr_eq(&first, &second));
    }
}
