//! Listing-surface semantics shared by every backend.
//!
//! Each function takes the full concrete-row catalog, collapses it to family
//! representatives, and applies one view's rules. Backends fetch rows however
//! they like; the semantics live here exactly once, so results can never
//! drift between the in-memory catalog and the relational one.

use crate::categories::category_matches;
use crate::family::family_representatives;
use crate::product::Product;
use crate::query::{run_query, CatalogQuery, Page};

/// Families filtered by public category and optional subcategory.
#[must_use]
pub fn by_subcategory(rows: &[Product], category: &str, subcategory: Option<&str>) -> Vec<Product> {
    family_representatives(rows)
        .into_iter()
        .filter(|p| category_matches(category, &p.category))
        .filter(|p| subcategory.is_none_or(|s| p.subcategory.eq_ignore_ascii_case(s)))
        .collect()
}

/// The full listing pipeline: dedupe, filter, stable-sort, paginate.
#[must_use]
pub fn paged_listing(rows: &[Product], query: &CatalogQuery) -> Page<Product> {
    run_query(family_representatives(rows), query)
}

/// Bestseller-flagged families, catalog order, truncated to `limit`.
#[must_use]
pub fn featured(rows: &[Product], limit: usize) -> Vec<Product> {
    family_representatives(rows)
        .into_iter()
        .filter(|p| p.is_bestseller)
        .take(limit)
        .collect()
}

/// New-flagged families, catalog order, truncated to `limit`.
#[must_use]
pub fn new_arrivals(rows: &[Product], limit: usize) -> Vec<Product> {
    family_representatives(rows)
        .into_iter()
        .filter(|p| p.is_new)
        .take(limit)
        .collect()
}

/// Families carrying a pre-sale price.
#[must_use]
pub fn sale_items(rows: &[Product]) -> Vec<Product> {
    family_representatives(rows)
        .into_iter()
        .filter(Product::is_on_sale)
        .collect()
}

/// New-flagged families; when nothing is flagged, an id-sorted slice of the
/// whole family list stands in so the view is never empty.
#[must_use]
pub fn new_releases(rows: &[Product], limit: Option<usize>) -> Vec<Product> {
    releases_from(family_representatives(rows), limit)
}

/// [`new_releases`] scoped to one public category; the fallback draws from
/// the same category rather than the whole catalog.
#[must_use]
pub fn new_releases_in_category(
    rows: &[Product],
    category: &str,
    limit: Option<usize>,
) -> Vec<Product> {
    let in_category: Vec<Product> = family_representatives(rows)
        .into_iter()
        .filter(|p| category_matches(category, &p.category))
        .collect();
    releases_from(in_category, limit)
}

fn releases_from(representatives: Vec<Product>, limit: Option<usize>) -> Vec<Product> {
    let mut fresh: Vec<Product> = representatives
        .iter()
        .filter(|p| p.is_new)
        .cloned()
        .collect();
    if fresh.is_empty() {
        fresh = representatives;
        fresh.sort_by(|a, b| a.id.cmp(&b.id));
    }
    if let Some(limit) = limit {
        fresh.truncate(limit);
    }
    fresh
}

/// Families whose name, category, subcategory, or short description
/// contains the query, truncated to `limit`.
#[must_use]
pub fn search(rows: &[Product], query: &str, limit: usize) -> Vec<Product> {
    family_representatives(rows)
        .into_iter()
        .filter(|p| p.matches_search(query))
        .take(limit)
        .collect()
}
