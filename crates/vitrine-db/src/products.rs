//! Database operations for `products`, `product_images`, and `product_variants`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::PgPool;
use vitrine_core::Product;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A concrete variant row from `products`, joined with its ordered image
/// URLs and its `product_variants` sibling-link count.
///
/// `colors` has no column: the family color union is derived in-process at
/// listing time, never stored.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub category: String,
    pub subcategory: String,
    pub color: Option<String>,
    pub sizes: Option<Vec<String>>,
    pub in_stock: bool,
    pub stock_quantity: Option<i32>,
    pub rating: Option<f32>,
    pub review_count: i32,
    pub is_new: bool,
    pub is_bestseller: bool,
    pub is_online_only: bool,
    pub is_limited_edition: bool,
    pub sku: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub key_benefits: Option<Vec<String>>,
    pub ingredients: Option<String>,
    pub how_to_use: Option<String>,
    pub specifications: Option<Json<BTreeMap<String, String>>>,
    pub scents: Option<Vec<String>>,
    pub capacities: Option<Vec<String>>,
    pub delivery_info: Option<String>,
    pub returns_info: Option<String>,
    pub warranty_info: Option<String>,
    pub videos: Option<Vec<String>>,
    /// Aggregated from `product_images`, primary URL first.
    pub image_urls: Vec<String>,
    /// `COUNT(*)` of this row's `product_variants` links.
    pub sibling_links: i64,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        let mut urls = record.image_urls.into_iter();
        let image = urls.next().unwrap_or_default();
        let images: Vec<String> = urls.collect();
        // Zero links means "no denormalized variant data", not "zero siblings".
        let variants = u32::try_from(record.sibling_links)
            .ok()
            .filter(|&links| links > 0);

        Self {
            id: record.id,
            name: record.name,
            brand: record.brand,
            price: record.price,
            original_price: record.original_price,
            image,
            images,
            category: record.category,
            subcategory: record.subcategory,
            color: record.color,
            colors: None,
            sizes: record.sizes,
            in_stock: record.in_stock,
            stock_quantity: record.stock_quantity,
            rating: record.rating,
            review_count: record.review_count,
            is_new: record.is_new,
            is_bestseller: record.is_bestseller,
            is_online_only: record.is_online_only,
            is_limited_edition: record.is_limited_edition,
            variants,
            sku: record.sku,
            short_description: record.short_description,
            description: record.description,
            key_benefits: record.key_benefits,
            ingredients: record.ingredients,
            how_to_use: record.how_to_use,
            specifications: record.specifications.map(|Json(map)| map),
            scents: record.scents,
            capacities: record.capacities,
            delivery_info: record.delivery_info,
            returns_info: record.returns_info,
            warranty_info: record.warranty_info,
            videos: record.videos,
        }
    }
}

/// A denormalized sibling link for `product_variants`, written by catalog
/// loaders alongside the concrete rows it connects.
#[derive(Debug, Clone)]
pub struct VariantLink {
    pub product_id: String,
    pub variant_product_id: String,
    pub color: Option<String>,
    pub size: Option<String>,
}

// ---------------------------------------------------------------------------
// products operations
// ---------------------------------------------------------------------------

const PRODUCT_SELECT: &str = "SELECT \
     p.id, p.name, p.brand, p.price, p.original_price, \
     p.category, p.subcategory, p.color, p.sizes, \
     p.in_stock, p.stock_quantity, p.rating, p.review_count, \
     p.is_new, p.is_bestseller, p.is_online_only, p.is_limited_edition, \
     p.sku, p.short_description, p.description, p.key_benefits, \
     p.ingredients, p.how_to_use, p.specifications, p.scents, p.capacities, \
     p.delivery_info, p.returns_info, p.warranty_info, p.videos, \
     COALESCE(img.urls, ARRAY[]::TEXT[]) AS image_urls, \
     COALESCE(links.cnt, 0) AS sibling_links \
 FROM products p \
 LEFT JOIN (SELECT product_id, ARRAY_AGG(url ORDER BY position) AS urls \
            FROM product_images GROUP BY product_id) img ON img.product_id = p.id \
 LEFT JOIN (SELECT product_id, COUNT(*) AS cnt \
            FROM product_variants GROUP BY product_id) links ON links.product_id = p.id";

/// Fetches the entire catalog in enumeration (`position`) order, images and
/// sibling-link counts joined in.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn fetch_catalog(pool: &PgPool) -> Result<Vec<ProductRecord>, DbError> {
    let sql = format!("{PRODUCT_SELECT} ORDER BY p.position");
    let rows = sqlx::query_as::<_, ProductRecord>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fetches one concrete row by id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn fetch_product_by_id(
    pool: &PgPool,
    id: &str,
) -> Result<Option<ProductRecord>, DbError> {
    let sql = format!("{PRODUCT_SELECT} WHERE p.id = $1");
    let row = sqlx::query_as::<_, ProductRecord>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Upserts a product's scalar columns. Image and sibling-link child rows are
/// managed separately; `position` is assigned on first insert and kept on
/// conflict, so re-staging a catalog does not reorder it.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the upsert fails.
pub async fn upsert_product(pool: &PgPool, product: &Product) -> Result<(), DbError> {
    sqlx::query(
        "INSERT INTO products \
             (id, name, brand, price, original_price, category, subcategory, \
              color, sizes, in_stock, stock_quantity, rating, review_count, \
              is_new, is_bestseller, is_online_only, is_limited_edition, \
              sku, short_description, description, key_benefits, ingredients, \
              how_to_use, specifications, scents, capacities, \
              delivery_info, returns_info, warranty_info, videos) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, \
                 $8, $9, $10, $11, $12, $13, \
                 $14, $15, $16, $17, \
                 $18, $19, $20, $21, $22, \
                 $23, $24::jsonb, $25, $26, \
                 $27, $28, $29, $30) \
         ON CONFLICT (id) DO UPDATE SET \
             name               = EXCLUDED.name, \
             brand              = EXCLUDED.brand, \
             price              = EXCLUDED.price, \
             original_price     = EXCLUDED.original_price, \
             category           = EXCLUDED.category, \
             subcategory        = EXCLUDED.subcategory, \
             color              = EXCLUDED.color, \
             sizes              = EXCLUDED.sizes, \
             in_stock           = EXCLUDED.in_stock, \
             stock_quantity     = EXCLUDED.stock_quantity, \
             rating             = EXCLUDED.rating, \
             review_count       = EXCLUDED.review_count, \
             is_new             = EXCLUDED.is_new, \
             is_bestseller      = EXCLUDED.is_bestseller, \
             is_online_only     = EXCLUDED.is_online_only, \
             is_limited_edition = EXCLUDED.is_limited_edition, \
             sku                = EXCLUDED.sku, \
             short_description  = EXCLUDED.short_description, \
             description        = EXCLUDED.description, \
             key_benefits       = EXCLUDED.key_benefits, \
             ingredients        = EXCLUDED.ingredients, \
             how_to_use         = EXCLUDED.how_to_use, \
             specifications     = EXCLUDED.specifications, \
             scents             = EXCLUDED.scents, \
             capacities         = EXCLUDED.capacities, \
             delivery_info      = EXCLUDED.delivery_info, \
             returns_info       = EXCLUDED.returns_info, \
             warranty_info      = EXCLUDED.warranty_info, \
             videos             = EXCLUDED.videos, \
             updated_at         = NOW()",
    )
    .bind(&product.id)
    .bind(&product.name)
    .bind(&product.brand)
    .bind(product.price)
    .bind(product.original_price)
    .bind(&product.category)
    .bind(&product.subcategory)
    .bind(&product.color)
    .bind(&product.sizes)
    .bind(product.in_stock)
    .bind(product.stock_quantity)
    .bind(product.rating)
    .bind(product.review_count)
    .bind(product.is_new)
    .bind(product.is_bestseller)
    .bind(product.is_online_only)
    .bind(product.is_limited_edition)
    .bind(&product.sku)
    .bind(&product.short_description)
    .bind(&product.description)
    .bind(&product.key_benefits)
    .bind(&product.ingredients)
    .bind(&product.how_to_use)
    .bind(product.specifications.as_ref().map(Json))
    .bind(&product.scents)
    .bind(&product.capacities)
    .bind(&product.delivery_info)
    .bind(&product.returns_info)
    .bind(&product.warranty_info)
    .bind(&product.videos)
    .execute(pool)
    .await?;
    Ok(())
}

/// Replaces a product's image rows. `urls` is the full ordered list with the
/// primary image first (position 0).
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any statement fails.
pub async fn replace_product_images(
    pool: &PgPool,
    product_id: &str,
    urls: &[String],
) -> Result<(), DbError> {
    sqlx::query("DELETE FROM product_images WHERE product_id = $1")
        .bind(product_id)
        .execute(pool)
        .await?;

    for (position, url) in urls.iter().enumerate() {
        sqlx::query("INSERT INTO product_images (product_id, url, position) VALUES ($1, $2, $3)")
            .bind(product_id)
            .bind(url)
            .bind(i32::try_from(position).unwrap_or(i32::MAX))
            .execute(pool)
            .await?;
    }
    Ok(())
}

/// Upserts one denormalized sibling link.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the upsert fails.
pub async fn insert_variant_link(pool: &PgPool, link: &VariantLink) -> Result<(), DbError> {
    sqlx::query(
        "INSERT INTO product_variants (product_id, variant_product_id, color, size) \
         VALUES ($1, $2, $3, $4) \
         ON CONFLICT (product_id, variant_product_id) DO UPDATE SET \
             color = EXCLUDED.color, \
             size  = EXCLUDED.size",
    )
    .bind(&link.product_id)
    .bind(&link.variant_product_id)
    .bind(&link.color)
    .bind(&link.size)
    .execute(pool)
    .await?;
    Ok(())
}

/// Loads a catalog in order: each row's scalars are upserted and its image
/// list replaced. Insertion order fixes `position`, so a staged catalog
/// enumerates exactly as the input slice did.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any statement fails.
pub async fn stage_catalog(pool: &PgPool, rows: &[Product]) -> Result<(), DbError> {
    for row in rows {
        upsert_product(pool, row).await?;
        let mut urls = Vec::with_capacity(row.images.len() + 1);
        urls.push(row.image.clone());
        urls.extend(row.images.iter().cloned());
        replace_product_images(pool, &row.id, &urls).await?;
    }
    Ok(())
}
