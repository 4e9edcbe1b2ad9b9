//! The built-in fixture catalog.
//!
//! A deterministic list of concrete variant rows (one per color/size
//! combination) in merchandising order, the way a catalog export emits
//! them: rows of the same family adjacent, departments interleaved the way
//! the storefront presents them. `colors` and `variants` are never set
//! here; both are derived at listing time.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use vitrine_core::Product;

const ATELIER: &str = "Atelier Laurent";
const MAISON: &str = "Maison Brume";
const FERRANTI: &str = "Ferranti Home";
const VOIE: &str = "Voie Libre";

fn usd(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

fn specs(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn base(id: &str, name: &str, brand: &str, category: &str, subcategory: &str, price: Decimal) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        price,
        original_price: None,
        image: format!("/images/products/{id}.jpg"),
        images: vec![format!("/images/products/{id}-alt.jpg")],
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        color: None,
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

/// The full concrete-row catalog, in stable merchandising order.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn fixture_catalog() -> Vec<Product> {
    vec![
        // -- Womenswear ------------------------------------------------------
        Product {
            color: Some("olive".to_string()),
            sizes: Some(strings(&["XS", "S", "M", "L"])),
            rating: Some(4.7),
            review_count: 112,
            is_bestseller: true,
            sku: Some("AL-W-1042-OLV".to_string()),
            short_description: Some("A midi wrap dress in washed cupro.".to_string()),
            description: Some(
                "Cut on the bias with a self-tie waist, the Margaux falls to \
                 mid-calf and moves like silk without the dry-clean bill."
                    .to_string(),
            ),
            videos: Some(strings(&["/videos/margaux-wrap-dress.mp4"])),
            ..base("w-margaux-olive", "Margaux Wrap Dress", ATELIER, "women", "dresses", usd(12_900))
        },
        Product {
            color: Some("black".to_string()),
            sizes: Some(strings(&["XS", "S", "M", "L", "XL"])),
            rating: Some(4.7),
            review_count: 112,
            sku: Some("AL-W-1042-BLK".to_string()),
            short_description: Some("A midi wrap dress in washed cupro.".to_string()),
            ..base("w-margaux-noir", "Margaux Wrap Dress", ATELIER, "women", "dresses", usd(12_900))
        },
        Product {
            color: Some("cream".to_string()),
            sizes: Some(strings(&["S", "M", "L"])),
            rating: Some(4.5),
            review_count: 41,
            is_new: true,
            sku: Some("AL-W-2210-CRM".to_string()),
            short_description: Some("A boxy cardigan in felted merino.".to_string()),
            ..base("w-odette-cream", "Odette Knit Cardigan", ATELIER, "women", "knitwear", usd(9_800))
        },
        Product {
            color: Some("rust".to_string()),
            sizes: Some(strings(&["S", "M", "L"])),
            rating: Some(4.5),
            review_count: 41,
            is_new: true,
            sku: Some("AL-W-2210-RST".to_string()),
            short_description: Some("A boxy cardigan in felted merino.".to_string()),
            ..base("w-odette-rust", "Odette Knit Cardigan", ATELIER, "women", "knitwear", usd(9_800))
        },
        Product {
            color: Some("navy".to_string()),
            sizes: Some(strings(&["S", "M"])),
            rating: Some(4.5),
            review_count: 41,
            is_new: true,
            stock_quantity: Some(3),
            sku: Some("AL-W-2210-NVY".to_string()),
            short_description: Some("A boxy cardigan in felted merino.".to_string()),
            ..base("w-odette-navy", "Odette Knit Cardigan", ATELIER, "women", "knitwear", usd(9_800))
        },
        Product {
            color: Some("white".to_string()),
            sizes: Some(strings(&["XS", "S", "M", "L"])),
            original_price: Some(usd(9_200)),
            rating: Some(4.3),
            review_count: 58,
            sku: Some("AL-W-3305-WHT".to_string()),
            short_description: Some("A relaxed shirt in European linen.".to_string()),
            ..base("w-juniper-white", "Juniper Linen Shirt", ATELIER, "women", "tops", usd(7_400))
        },
        Product {
            color: Some("sage".to_string()),
            sizes: Some(strings(&["S", "M", "L"])),
            original_price: Some(usd(9_200)),
            rating: Some(4.3),
            review_count: 58,
            in_stock: false,
            stock_quantity: Some(0),
            sku: Some("AL-W-3305-SGE".to_string()),
            short_description: Some("A relaxed shirt in European linen.".to_string()),
            ..base("w-juniper-sage", "Juniper Linen Shirt", ATELIER, "women", "tops", usd(7_400))
        },
        // -- Menswear (no new-season flags this drop) -------------------------
        Product {
            color: Some("blue".to_string()),
            sizes: Some(strings(&["S", "M", "L", "XL", "XXL"])),
            rating: Some(4.8),
            review_count: 203,
            is_bestseller: true,
            sku: Some("AL-M-1108-BLU".to_string()),
            short_description: Some("The everyday oxford, garment-washed.".to_string()),
            ..base("m-arlo-blue", "Arlo Oxford Shirt", ATELIER, "men", "shirts", usd(7_900))
        },
        Product {
            color: Some("white".to_string()),
            sizes: Some(strings(&["S", "M", "L", "XL"])),
            rating: Some(4.8),
            review_count: 203,
            sku: Some("AL-M-1108-WHT".to_string()),
            short_description: Some("The everyday oxford, garment-washed.".to_string()),
            ..base("m-arlo-white", "Arlo Oxford Shirt", ATELIER, "men", "shirts", usd(7_900))
        },
        Product {
            color: Some("charcoal".to_string()),
            sizes: Some(strings(&["M", "L", "XL"])),
            rating: Some(4.6),
            review_count: 89,
            sku: Some("AL-M-2419-CHL".to_string()),
            short_description: Some("A crew-neck jumper in extra-fine merino.".to_string()),
            ..base("m-hudson-charcoal", "Hudson Merino Jumper", ATELIER, "men", "knitwear", usd(11_800))
        },
        Product {
            color: Some("forest".to_string()),
            sizes: Some(strings(&["M", "L"])),
            original_price: Some(usd(13_900)),
            rating: Some(4.6),
            review_count: 89,
            sku: Some("AL-M-2419-FST".to_string()),
            short_description: Some("A crew-neck jumper in extra-fine merino.".to_string()),
            ..base("m-hudson-forest", "Hudson Merino Jumper", ATELIER, "men", "knitwear", usd(11_800))
        },
        // -- Beauty -----------------------------------------------------------
        Product {
            rating: Some(4.4),
            review_count: 76,
            is_new: true,
            is_online_only: true,
            capacities: Some(strings(&["50ml", "100ml"])),
            key_benefits: Some(strings(&[
                "Instant hydration",
                "Sets makeup without residue",
                "Damask rose water base",
            ])),
            ingredients: Some("Rosa damascena flower water, glycerin, sodium hyaluronate.".to_string()),
            how_to_use: Some("Mist over cleansed skin morning and night, or over makeup to set.".to_string()),
            sku: Some("MB-SK-0107".to_string()),
            short_description: Some("A hydrating rose mist for face and hair.".to_string()),
            ..base("b-roseveil", "Rose Veil Face Mist", MAISON, "beauty", "skincare", usd(3_200))
        },
        Product {
            rating: Some(4.9),
            review_count: 67,
            is_limited_edition: true,
            capacities: Some(strings(&["30ml", "50ml"])),
            key_benefits: Some(strings(&["Eau de parfum strength", "Unisex"])),
            sku: Some("MB-FR-0315".to_string()),
            short_description: Some("Neroli over smoked cedar and amber.".to_string()),
            description: Some(
                "Opens with bitter orange blossom and settles into a dark, \
                 resinous base. Bottled in small numbered batches."
                    .to_string(),
            ),
            ..base("b-neroli", "Néroli Noir Eau de Parfum", MAISON, "beauty", "fragrance", usd(14_800))
        },
        Product {
            rating: Some(4.6),
            review_count: 154,
            is_bestseller: true,
            ingredients: Some("Shea butter, calendula extract, beeswax, lavender oil.".to_string()),
            how_to_use: Some("Work a pea-sized amount into hands after washing.".to_string()),
            sku: Some("MB-BC-0522".to_string()),
            short_description: Some("A dense repair balm for working hands.".to_string()),
            ..base("b-balm", "Gardener's Hand Balm", MAISON, "beauty", "bodycare", usd(2_400))
        },
        // -- Home --------------------------------------------------------------
        Product {
            rating: Some(4.6),
            review_count: 231,
            is_bestseller: true,
            scents: Some(strings(&["Fig & Cassis", "Cedar & Smoke", "Sea Salt"])),
            how_to_use: Some("Trim the wick to 5mm before each burn; first burn two hours.".to_string()),
            specifications: Some(specs(&[("Burn time", "45 hours"), ("Wax", "100% soy")])),
            sku: Some("FH-CA-0901".to_string()),
            short_description: Some("A hand-poured soy candle in three scents.".to_string()),
            ..base("h-alba", "Alba Soy Candle", FERRANTI, "home", "candles", usd(4_200))
        },
        Product {
            color: Some("speckle".to_string()),
            specifications: Some(specs(&[("Capacity", "350ml"), ("Care", "Dishwasher safe")])),
            sku: Some("FH-CE-1204".to_string()),
            short_description: Some("A stoneware mug glazed in small batches.".to_string()),
            ..base("h-beppu-speckle", "Beppu Stoneware Mug", FERRANTI, "home", "ceramics", usd(1_800))
        },
        Product {
            color: Some("indigo".to_string()),
            specifications: Some(specs(&[("Capacity", "350ml"), ("Care", "Dishwasher safe")])),
            sku: Some("FH-CE-1205".to_string()),
            short_description: Some("A stoneware mug glazed in small batches.".to_string()),
            ..base("h-beppu-indigo", "Beppu Stoneware Mug", FERRANTI, "home", "ceramics", usd(1_800))
        },
        Product {
            color: Some("oat".to_string()),
            rating: Some(4.8),
            review_count: 45,
            specifications: Some(specs(&[("Material", "Lambswool"), ("Dimensions", "130 x 180 cm")])),
            delivery_info: Some("Ships flat-packed within 3 working days.".to_string()),
            returns_info: Some("30-day returns in original condition.".to_string()),
            sku: Some("FH-TX-2010".to_string()),
            short_description: Some("A lambswool throw woven in the Borders.".to_string()),
            ..base("h-marlowe-oat", "Marlowe Wool Throw", FERRANTI, "home", "textiles", usd(16_000))
        },
        Product {
            color: Some("slate".to_string()),
            rating: Some(4.8),
            review_count: 45,
            specifications: Some(specs(&[("Material", "Lambswool"), ("Dimensions", "130 x 180 cm")])),
            sku: Some("FH-TX-2011".to_string()),
            short_description: Some("A lambswool throw woven in the Borders.".to_string()),
            ..base("h-marlowe-slate", "Marlowe Wool Throw", FERRANTI, "home", "textiles", usd(16_000))
        },
        Product {
            color: Some("brass".to_string()),
            rating: Some(4.2),
            review_count: 12,
            specifications: Some(specs(&[("Bulb", "E14, max 40W"), ("Height", "38 cm")])),
            warranty_info: Some("Two-year electrical warranty.".to_string()),
            videos: Some(strings(&["/videos/lumen-table-lamp.mp4"])),
            sku: Some("FH-LT-3302".to_string()),
            short_description: Some("A spun-metal table lamp with a fabric cord.".to_string()),
            ..base("h-lumen", "Lumen Table Lamp", FERRANTI, "home", "lighting", usd(12_000))
        },
        // -- Accessories --------------------------------------------------------
        Product {
            color: Some("natural".to_string()),
            rating: Some(4.5),
            review_count: 95,
            is_new: true,
            sku: Some("VL-BG-0415".to_string()),
            short_description: Some("A structured tote in 18oz canvas.".to_string()),
            ..base("a-voyager-natural", "Voyager Canvas Tote", VOIE, "accessories", "bags", usd(5_800))
        },
        Product {
            color: Some("black".to_string()),
            rating: Some(4.5),
            review_count: 95,
            is_new: true,
            sku: Some("VL-BG-0416".to_string()),
            short_description: Some("A structured tote in 18oz canvas.".to_string()),
            ..base("a-voyager-noir", "Voyager Canvas Tote", VOIE, "accessories", "bags", usd(5_800))
        },
        Product {
            color: Some("gold".to_string()),
            rating: Some(4.7),
            review_count: 28,
            stock_quantity: Some(14),
            sku: Some("VL-JW-0688".to_string()),
            short_description: Some("Chunky hoops in gold-plated brass.".to_string()),
            ..base("a-selene", "Selene Hoop Earrings", VOIE, "accessories", "jewelry", usd(4_500))
        },
        Product {
            is_online_only: true,
            sku: Some("VL-HA-0712".to_string()),
            short_description: Some("An oversized claw in tortoiseshell acetate.".to_string()),
            ..base("a-comet", "Comet Hair Claw", VOIE, "accessories", "hair", usd(1_600))
        },
    ]
}
