//! Offline behavior tests: the full repository trait exercised against the
//! in-memory backend, with no database in sight.

use rust_decimal::Decimal;
use vitrine_catalog::{
    CatalogQuery, CatalogRepository, FilterState, InMemoryCatalog, Product, SortOrder,
};

fn make_product(id: &str, name: &str, color: Option<&str>, price_cents: i64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        brand: "Form & Field".to_string(),
        price: Decimal::new(price_cents, 2),
        original_price: None,
        image: format!("/images/{id}.jpg"),
        images: Vec::new(),
        category: "home".to_string(),
        subcategory: "objects".to_string(),
        color: color.map(ToString::to_string),
        colors: None,
        sizes: None,
        in_stock: true,
        stock_quantity: None,
        rating: None,
        review_count: 0,
        is_new: false,
        is_bestseller: false,
        is_online_only: false,
        is_limited_edition: false,
        variants: None,
        sku: None,
        short_description: None,
        description: None,
        key_benefits: None,
        ingredients: None,
        how_to_use: None,
        specifications: None,
        scents: None,
        capacities: None,
        delivery_info: None,
        returns_info: None,
        warranty_info: None,
        videos: None,
    }
}

fn fixtures() -> InMemoryCatalog {
    InMemoryCatalog::with_fixture_catalog()
}

#[tokio::test]
async fn grouped_listing_collapses_families_and_unions_colors() {
    let repo = InMemoryCatalog::new(vec![
        make_product("a1", "Cube", Some("white"), 2_000),
        make_product("a2", "Cube", Some("black"), 2_000),
        make_product("b1", "Sphere", Some("red"), 3_000),
    ]);

    let listed = repo.list_all_products().await;

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, "a1");
    assert_eq!(
        listed[0].colors,
        Some(vec!["white".to_string(), "black".to_string()])
    );
    assert_eq!(listed[0].variants, Some(1));
    assert_eq!(listed[1].id, "b1");
    assert_eq!(listed[1].colors, Some(vec!["red".to_string()]));
    assert_eq!(listed[1].variants, Some(0));
}

#[tokio::test]
async fn variant_resolution_round_trips_through_the_trait() {
    let repo = InMemoryCatalog::new(vec![
        make_product("a1", "Cube", Some("white"), 2_000),
        make_product("a2", "Cube", Some("black"), 2_000),
        make_product("b1", "Sphere", Some("red"), 3_000),
    ]);

    let siblings = repo.get_product_variants("a2").await;
    let ids: Vec<&str> = siblings.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["a1", "a2"]);
    // Raw rows come back untouched by grouping.
    assert_eq!(siblings[0].colors, None);
    assert_eq!(siblings[0].variants, None);

    assert_eq!(repo.get_base_product_id("a2").await.as_deref(), Some("a1"));
    assert_eq!(repo.get_base_product_id("b1").await.as_deref(), Some("b1"));
    assert_eq!(repo.get_base_product_id("zz").await, None);
    assert!(repo.get_product_variants("zz").await.is_empty());
}

#[tokio::test]
async fn price_window_query_pages_the_cheapest_first() {
    let rows = vec![
        make_product("p1", "Pedestal", None, 3_000),
        make_product("p2", "Plinth", None, 6_000),
        make_product("p3", "Prism", None, 7_000),
        make_product("p4", "Pyramid", None, 9_000),
        make_product("p5", "Pillar", None, 12_000),
    ];
    let repo = InMemoryCatalog::new(rows);

    let query = CatalogQuery {
        filters: FilterState {
            price_range: (Decimal::new(5_000, 2), Decimal::new(10_000, 2)),
            ..FilterState::default()
        },
        sort: SortOrder::PriceAsc,
        page: Some(1),
        page_size: Some(2),
    };
    let page = repo.list_products(&query).await;

    let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p2", "p3"]);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert!(page.has_next);
    assert!(!page.has_previous);
}

#[tokio::test]
async fn the_clothing_group_spans_both_apparel_departments() {
    let repo = fixtures();

    let clothing = repo.list_products_by_subcategory("clothing", None).await;

    assert_eq!(clothing.len(), 5);
    assert!(clothing
        .iter()
        .all(|p| p.category == "women" || p.category == "men"));

    let knitwear = repo
        .list_products_by_subcategory("clothing", Some("knitwear"))
        .await;
    let ids: Vec<&str> = knitwear.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["w-odette-cream", "m-hudson-charcoal"]);
}

#[tokio::test]
async fn featured_and_arrivals_respect_their_flags() {
    let repo = fixtures();

    let featured = repo.list_featured(8).await;
    assert_eq!(featured.len(), 4);
    assert!(featured.iter().all(|p| p.is_bestseller));
    assert_eq!(repo.list_featured(2).await.len(), 2);

    let arrivals = repo.list_new_arrivals(10).await;
    assert!(!arrivals.is_empty());
    assert!(arrivals.iter().all(|p| p.is_new));
}

#[tokio::test]
async fn sale_listings_follow_the_representative_row() {
    let repo = fixtures();

    let sale = repo.list_sale_products().await;

    // The Hudson jumper discounts only a non-representative colorway, so the
    // family stays out of the sale rail.
    let ids: Vec<&str> = sale.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["w-juniper-white"]);
    assert!(sale.iter().all(|p| p.original_price.is_some()));
}

#[tokio::test]
async fn release_listings_fall_back_where_nothing_is_flagged() {
    let repo = fixtures();

    let women = repo.list_new_releases_in_category("women", None).await;
    assert!(!women.is_empty());
    assert!(women.iter().all(|p| p.is_new));

    // Menswear has no flagged rows this season; newest ids stand in.
    let men = repo.list_new_releases_in_category("men", None).await;
    let ids: Vec<&str> = men.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["m-arlo-blue", "m-hudson-charcoal"]);

    let capped = repo.list_new_releases(Some(2)).await;
    assert_eq!(capped.len(), 2);
}

#[tokio::test]
async fn search_reads_names_and_marketing_copy() {
    let repo = fixtures();

    let hits = repo.search_products("margaux", 10).await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "w-margaux-olive");

    let linen = repo.search_products("linen", 10).await;
    assert!(linen.iter().any(|p| p.id == "w-juniper-white"));

    assert!(repo.search_products("xyzzy", 10).await.is_empty());
    assert!(repo.search_products("a", 3).await.len() <= 3);
}

#[tokio::test]
async fn lookup_by_id_returns_the_stored_row() {
    let repo = fixtures();

    let row = repo.get_product_by_id("h-alba").await.unwrap();
    assert_eq!(row.name, "Alba Soy Candle");
    assert_eq!(row.colors, None);
    assert_eq!(row.variants, None);

    assert!(repo.get_product_by_id("nope").await.is_none());
}
