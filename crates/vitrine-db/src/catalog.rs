//! The relational catalog backend.

use async_trait::async_trait;
use sqlx::PgPool;
use vitrine_core::{family, listing, CatalogQuery, CatalogRepository, Page, Product};

use crate::products::{fetch_catalog, fetch_product_by_id};
use crate::DbError;

/// Catalog repository backed by Postgres.
///
/// Reads fetch concrete rows in stored order and re-run the same in-process
/// listing semantics as the in-memory backend, so the two can never
/// disagree. Infrastructure failures are logged and degrade to the
/// operation's empty value; a rendering page never sees an error from this
/// type.
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool, for health checks and tooling.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn all_rows(&self, operation: &'static str) -> Vec<Product> {
        match fetch_catalog(&self.pool).await {
            Ok(records) => records.into_iter().map(Product::from).collect(),
            Err(e) => {
                log_degraded(operation, &e);
                Vec::new()
            }
        }
    }
}

fn log_degraded(operation: &'static str, error: &DbError) {
    tracing::error!(error = %error, operation, "catalog query failed, serving empty result");
}

#[async_trait]
impl CatalogRepository for PgCatalog {
    async fn list_all_products(&self) -> Vec<Product> {
        family::family_representatives(&self.all_rows("list_all_products").await)
    }

    async fn list_all_products_with_variants(&self) -> Vec<Product> {
        self.all_rows("list_all_products_with_variants").await
    }

    async fn get_product_by_id(&self, id: &str) -> Option<Product> {
        match fetch_product_by_id(&self.pool, id).await {
            Ok(record) => record.map(Product::from),
            Err(e) => {
                log_degraded("get_product_by_id", &e);
                None
            }
        }
    }

    async fn list_products_by_subcategory(
        &self,
        category: &str,
        subcategory: Option<&str>,
    ) -> Vec<Product> {
        let rows = self.all_rows("list_products_by_subcategory").await;
        listing::by_subcategory(&rows, category, subcategory)
    }

    async fn list_products(&self, query: &CatalogQuery) -> Page<Product> {
        let rows = self.all_rows("list_products").await;
        listing::paged_listing(&rows, query)
    }

    async fn list_featured(&self, limit: usize) -> Vec<Product> {
        let rows = self.all_rows("list_featured").await;
        listing::featured(&rows, limit)
    }

    async fn list_new_arrivals(&self, limit: usize) -> Vec<Product> {
        let rows = self.all_rows("list_new_arrivals").await;
        listing::new_arrivals(&rows, limit)
    }

    async fn list_sale_products(&self) -> Vec<Product> {
        let rows = self.all_rows("list_sale_products").await;
        listing::sale_items(&rows)
    }

    async fn list_new_releases(&self, limit: Option<usize>) -> Vec<Product> {
        let rows = self.all_rows("list_new_releases").await;
        listing::new_releases(&rows, limit)
    }

    async fn list_new_releases_in_category(
        &self,
        category: &str,
        limit: Option<usize>,
    ) -> Vec<Product> {
        let rows = self.all_rows("list_new_releases_in_category").await;
        listing::new_releases_in_category(&rows, category, limit)
    }

    async fn search_products(&self, query: &str, limit: usize) -> Vec<Product> {
        let rows = self.all_rows("search_products").await;
        listing::search(&rows, query, limit)
    }

    async fn get_product_variants(&self, member_id: &str) -> Vec<Product> {
        let rows = self.all_rows("get_product_variants").await;
        family::family_members(&rows, member_id)
    }

    async fn get_base_product_id(&self, id: &str) -> Option<String> {
        let rows = self.all_rows("get_base_product_id").await;
        family::base_product_id(&rows, id)
    }
}
