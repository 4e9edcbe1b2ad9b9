//! Walk the main storefront surfaces against whichever backend the
//! environment selects.
//!
//! ```bash
//! cargo run --example browse
//! VITRINE_CATALOG_BACKEND=postgres DATABASE_URL=postgres://... cargo run --example browse
//! ```

use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;
use vitrine_catalog::{catalog, CatalogQuery, FilterState, SortOrder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = vitrine_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(backend = %config.backend, "opening the catalog");
    let repo = catalog().await;

    let families = repo.list_all_products().await;
    println!("storefront grid: {} products", families.len());
    for product in families.iter().take(5) {
        println!(
            "  {} ({}) {:>8}  colors {:?}  +{} variants",
            product.name,
            product.id,
            product.price,
            product.colors.as_deref().unwrap_or_default(),
            product.variants.unwrap_or(0),
        );
    }

    println!("\nfeatured:");
    for product in repo.list_featured(4).await {
        println!("  {} {:>8}", product.name, product.price);
    }

    let query = CatalogQuery {
        filters: FilterState {
            price_range: (Decimal::new(5_000, 2), Decimal::new(10_000, 2)),
            ..FilterState::default()
        },
        sort: SortOrder::PriceAsc,
        page: Some(1),
        page_size: Some(6),
    };
    let page = repo.list_products(&query).await;
    println!(
        "\n$50-$100, cheapest first: page {}/{} of {} matches",
        page.page, page.total_pages, page.total
    );
    for product in &page.items {
        println!("  {} {:>8}", product.name, product.price);
    }

    println!("\nsearch \"linen\":");
    for product in repo.search_products("linen", 5).await {
        println!("  {} [{}/{}]", product.name, product.category, product.subcategory);
    }

    if let Some(rep) = families.iter().find(|p| p.variants.unwrap_or(0) > 0) {
        println!("\nother colorways of {}:", rep.name);
        for sibling in repo.get_product_variants(&rep.id).await {
            let base = repo.get_base_product_id(&sibling.id).await;
            println!(
                "  {} color {:?} (base {:?})",
                sibling.id, sibling.color, base
            );
        }
    }

    Ok(())
}
