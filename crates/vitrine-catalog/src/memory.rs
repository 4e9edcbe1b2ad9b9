//! The in-memory catalog backend.

use async_trait::async_trait;
use vitrine_core::{family, listing, CatalogQuery, CatalogRepository, Page, Product};

/// Catalog repository over a fixed list of concrete rows.
///
/// The reference backend: rows are immutable after construction and every
/// operation is a pure application of the shared core primitives, with
/// nothing that can fail. The relational backend must return the same
/// results for the same logical catalog.
pub struct InMemoryCatalog {
    rows: Vec<Product>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(rows: Vec<Product>) -> Self {
        Self { rows }
    }

    /// The built-in fixture catalog.
    #[must_use]
    pub fn with_fixture_catalog() -> Self {
        Self::new(crate::fixtures::fixture_catalog())
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list_all_products(&self) -> Vec<Product> {
        family::family_representatives(&self.rows)
    }

    async fn list_all_products_with_variants(&self) -> Vec<Product> {
        self.rows.clone()
    }

    async fn get_product_by_id(&self, id: &str) -> Option<Product> {
        self.rows.iter().find(|p| p.id == id).cloned()
    }

    async fn list_products_by_subcategory(
        &self,
        category: &str,
        subcategory: Option<&str>,
    ) -> Vec<Product> {
        listing::by_subcategory(&self.rows, category, subcategory)
    }

    async fn list_products(&self, query: &CatalogQuery) -> Page<Product> {
        listing::paged_listing(&self.rows, query)
    }

    async fn list_featured(&self, limit: usize) -> Vec<Product> {
        listing::featured(&self.rows, limit)
    }

    async fn list_new_arrivals(&self, limit: usize) -> Vec<Product> {
        listing::new_arrivals(&self.rows, limit)
    }

    async fn list_sale_products(&self) -> Vec<Product> {
        listing::sale_items(&self.rows)
    }

    async fn list_new_releases(&self, limit: Option<usize>) -> Vec<Product> {
        listing::new_releases(&self.rows, limit)
    }

    async fn list_new_releases_in_category(
        &self,
        category: &str,
        limit: Option<usize>,
    ) -> Vec<Product> {
        listing::new_releases_in_category(&self.rows, category, limit)
    }

    async fn search_products(&self, query: &str, limit: usize) -> Vec<Product> {
        listing::search(&self.rows, query, limit)
    }

    async fn get_product_variants(&self, member_id: &str) -> Vec<Product> {
        family::family_members(&self.rows, member_id)
    }

    async fn get_base_product_id(&self, id: &str) -> Option<String> {
        family::base_product_id(&self.rows, id)
    }
}
