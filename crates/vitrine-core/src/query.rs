use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Sort orders a listing surface can request.
///
/// `Relevance` and `Newest` are intentionally order-preserving: catalog rows
/// are already stored in relevance/recency order, so both leave the input
/// sequence untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Relevance,
    Newest,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    RatingDesc,
}

impl SortOrder {
    /// Parses a wire key (e.g. `"price-asc"`). Unknown keys degrade to
    /// [`SortOrder::Relevance`] rather than erroring.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "newest" => Self::Newest,
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "name-asc" => Self::NameAsc,
            "name-desc" => Self::NameDesc,
            "rating-desc" => Self::RatingDesc,
            _ => Self::Relevance,
        }
    }

    #[must_use]
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Newest => "newest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::RatingDesc => "rating-desc",
        }
    }
}

/// Immutable filter selection. Set-valued filters are unrestricted when
/// empty; the price range is always applied, bounds inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub price_range: (Decimal, Decimal),
    pub sizes: HashSet<String>,
    pub colors: HashSet<String>,
    pub categories: HashSet<String>,
    pub subcategories: HashSet<String>,
    pub in_stock_only: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            price_range: (Decimal::ZERO, Decimal::MAX),
            sizes: HashSet::new(),
            colors: HashSet::new(),
            categories: HashSet::new(),
            subcategories: HashSet::new(),
            in_stock_only: false,
        }
    }
}

impl FilterState {
    /// Returns `true` when every active predicate holds for `product`.
    ///
    /// The color predicate consults both the row's own `color` and the
    /// family union in `colors`, so a representative matches when any of its
    /// siblings comes in a selected color.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let (min, max) = self.price_range;
        if product.price < min || product.price > max {
            return false;
        }
        if self.in_stock_only && !product.in_stock {
            return false;
        }
        if !self.sizes.is_empty() {
            let hit = product
                .sizes
                .as_deref()
                .is_some_and(|sizes| sizes.iter().any(|s| self.sizes.contains(s)));
            if !hit {
                return false;
            }
        }
        if !self.colors.is_empty() {
            let single = product
                .color
                .as_deref()
                .is_some_and(|c| self.colors.contains(c));
            let union = product
                .colors
                .as_deref()
                .is_some_and(|cs| cs.iter().any(|c| self.colors.contains(c)));
            if !single && !union {
                return false;
            }
        }
        if !self.categories.is_empty() && !contains_ci(&self.categories, &product.category) {
            return false;
        }
        if !self.subcategories.is_empty() && !contains_ci(&self.subcategories, &product.subcategory)
        {
            return false;
        }
        true
    }
}

fn contains_ci(set: &HashSet<String>, value: &str) -> bool {
    set.iter().any(|s| s.eq_ignore_ascii_case(value))
}

/// Everything a listing request can specify. `page_size: None` disables
/// pagination (the whole result set comes back as page 1).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub filters: FilterState,
    pub sort: SortOrder,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// One page of results plus the bookkeeping a pager widget needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matches before the page slice was taken.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Stable in-place sort. Equal keys keep their input order, which is what
/// makes `Relevance`/`Newest` exact no-ops and ties deterministic.
pub fn apply_sort(products: &mut [Product], sort: SortOrder) {
    match sort {
        SortOrder::Relevance | SortOrder::Newest => {}
        SortOrder::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::NameAsc => {
            products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortOrder::NameDesc => {
            products.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
        }
        SortOrder::RatingDesc => {
            // Missing ratings sort as 0, i.e. after every rated row.
            products.sort_by(|a, b| {
                b.rating
                    .unwrap_or(0.0)
                    .total_cmp(&a.rating.unwrap_or(0.0))
            });
        }
    }
}

/// Slices `items` into a 1-based page.
///
/// Caller misuse is clamped, never rejected: page 0 (or `None`) becomes 1
/// and a page size of 0 becomes 1. A page past the end yields empty `items`
/// with `total`/`total_pages` still describing the full result set.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: Option<usize>, page_size: Option<usize>) -> Page<T> {
    let total = items.len();
    let Some(size) = page_size else {
        return Page {
            items,
            total,
            page: 1,
            page_size: total,
            total_pages: usize::from(total > 0),
            has_next: false,
            has_previous: false,
        };
    };

    let size = size.max(1);
    let page = page.unwrap_or(1).max(1);
    let total_pages = total.div_ceil(size);
    let start = (page - 1).saturating_mul(size);
    let items: Vec<T> = items.into_iter().skip(start).take(size).collect();

    Page {
        items,
        total,
        page,
        page_size: size,
        total_pages,
        has_next: page < total_pages,
        has_previous: page > 1,
    }
}

/// Filter, then stable-sort, then paginate. The whole listing pipeline;
/// both backends feed their family lists through here.
#[must_use]
pub fn run_query(rows: Vec<Product>, query: &CatalogQuery) -> Page<Product> {
    let mut matched: Vec<Product> = rows
        .into_iter()
        .filter(|p| query.filters.matches(p))
        .collect();
    apply_sort(&mut matched, query.sort);
    paginate(matched, query.page, query.page_size)
}
