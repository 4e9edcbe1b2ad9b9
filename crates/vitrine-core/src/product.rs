use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One concrete catalog row: a single purchasable color/size combination.
///
/// Rows sharing a `name` form a variant family; listing surfaces collapse
/// them to one representative via [`crate::family::family_representatives`].
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Globally unique per concrete row, assigned by the catalog source.
    pub id: String,
    /// Display name, shared by every row of the same variant family.
    pub name: String,
    pub brand: String,
    /// Current price. `NUMERIC(10,2)` in the relational backend.
    pub price: Decimal,
    /// Pre-sale price; presence signals the row is on sale.
    pub original_price: Option<Decimal>,
    /// Primary image URL.
    pub image: String,
    /// Additional image URLs, in display order.
    pub images: Vec<String>,
    /// Stored category value (e.g. `"women"`), not the public group name.
    pub category: String,
    pub subcategory: String,
    /// This row's single color, if the product is colored at all.
    pub color: Option<String>,
    /// Union of the family's colors; populated on family representatives.
    pub colors: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub in_stock: bool,
    pub stock_quantity: Option<i32>,
    /// Average review rating; rows without reviews sort as 0.
    pub rating: Option<f32>,
    pub review_count: i32,
    pub is_new: bool,
    pub is_bestseller: bool,
    pub is_online_only: bool,
    pub is_limited_edition: bool,
    /// Sibling count (family size minus one); populated on representatives.
    pub variants: Option<u32>,
    pub sku: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub key_benefits: Option<Vec<String>>,
    pub ingredients: Option<String>,
    /// Usage or care instructions.
    pub how_to_use: Option<String>,
    /// Technical specifications, keyed by label. Ordered for stable output.
    pub specifications: Option<BTreeMap<String, String>>,
    /// Scent options offered on the product page.
    pub scents: Option<Vec<String>>,
    /// Capacity options offered on the product page (e.g. `"50ml"`).
    pub capacities: Option<Vec<String>>,
    pub delivery_info: Option<String>,
    pub returns_info: Option<String>,
    pub warranty_info: Option<String>,
    pub videos: Option<Vec<String>>,
}

impl Product {
    /// Returns `true` if the row carries a pre-sale price.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    /// Percentage discount against the pre-sale price, rounded to the
    /// nearest whole percent. `None` when the row is not discounted.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original.is_zero() || original <= self.price {
            return None;
        }
        let ratio = (original - self.price) / original * Decimal::from(100);
        ratio.round().to_u32()
    }

    /// Case-insensitive substring match over name, category, subcategory,
    /// and short description. Both backends route search through this.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
            || self.subcategory.to_lowercase().contains(&needle)
            || self
                .short_description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}
