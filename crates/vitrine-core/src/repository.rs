use async_trait::async_trait;

use crate::product::Product;
use crate::query::{CatalogQuery, Page};

/// The surface page-level code talks to, regardless of backing store.
///
/// Listing methods return family representatives; detail methods return
/// concrete rows as stored. Every method is infallible by contract: a
/// missing row is `None`, and an implementation that hits infrastructure
/// trouble logs the failure and returns the operation's empty value rather
/// than surfacing an error to a rendering page.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// The whole catalog as a family list.
    async fn list_all_products(&self) -> Vec<Product>;

    /// Every concrete variant row, undeduplicated, in catalog order.
    async fn list_all_products_with_variants(&self) -> Vec<Product>;

    /// One concrete row by id, exactly as stored.
    async fn get_product_by_id(&self, id: &str) -> Option<Product>;

    /// Families under a public category, optionally narrowed to one
    /// subcategory (exact, case-insensitive).
    async fn list_products_by_subcategory(
        &self,
        category: &str,
        subcategory: Option<&str>,
    ) -> Vec<Product>;

    /// Filtered, sorted, paginated family listing.
    async fn list_products(&self, query: &CatalogQuery) -> Page<Product>;

    /// Bestseller families, truncated to `limit`.
    async fn list_featured(&self, limit: usize) -> Vec<Product>;

    /// New-flagged families, truncated to `limit`.
    async fn list_new_arrivals(&self, limit: usize) -> Vec<Product>;

    /// Families currently carrying a pre-sale price.
    async fn list_sale_products(&self) -> Vec<Product>;

    /// New-flagged families, with an id-sorted fallback slice when nothing
    /// is flagged, so the view is never empty for a stocked catalog.
    async fn list_new_releases(&self, limit: Option<usize>) -> Vec<Product>;

    /// [`Self::list_new_releases`] scoped to one public category.
    async fn list_new_releases_in_category(
        &self,
        category: &str,
        limit: Option<usize>,
    ) -> Vec<Product>;

    /// Substring search over name, category, subcategory, and short
    /// description, truncated to `limit`.
    async fn search_products(&self, query: &str, limit: usize) -> Vec<Product>;

    /// Every concrete row in the family of `member_id`, in catalog order.
    async fn get_product_variants(&self, member_id: &str) -> Vec<Product>;

    /// The id of the family's representative row for any member id.
    async fn get_base_product_id(&self, id: &str) -> Option<String>;
}
