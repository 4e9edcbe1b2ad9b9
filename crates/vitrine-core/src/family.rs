//! Variant family resolution.
//!
//! Concrete catalog rows (one per color/size combination) are grouped into
//! families keyed solely by display name. Listing surfaces show one
//! representative per family; detail surfaces enumerate the members. The
//! name key is deliberate and unguarded: two unrelated rows that share a
//! name will merge. Catalog data owns name uniqueness, not this module.

use std::collections::HashMap;

use crate::product::Product;

struct FamilyGroup {
    representative: Product,
    color_union: Vec<String>,
    members: usize,
}

impl FamilyGroup {
    fn absorb(&mut self, row: &Product) {
        self.members += 1;
        if let Some(color) = &row.color {
            push_unique(&mut self.color_union, color);
        }
        if let Some(colors) = &row.colors {
            for color in colors {
                push_unique(&mut self.color_union, color);
            }
        }
    }
}

fn push_unique(union: &mut Vec<String>, color: &str) {
    if !union.iter().any(|c| c == color) {
        union.push(color.to_string());
    }
}

/// Collapses concrete rows into one representative per family.
///
/// Families appear in first-seen order of their names; the representative is
/// a clone of the group's first row with two fields rewritten: `colors`
/// becomes the deduplicated union of every `color` and `colors` value in the
/// group (in first-seen order, unset when the union is empty) and `variants`
/// becomes the sibling count (group size minus one). Everything else,
/// including the first row's own `color` and `sizes`, is left as stored.
#[must_use]
pub fn family_representatives(rows: &[Product]) -> Vec<Product> {
    let mut groups: Vec<FamilyGroup> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();

    for row in rows {
        match index_by_name.get(row.name.as_str()) {
            Some(&idx) => groups[idx].absorb(row),
            None => {
                index_by_name.insert(row.name.as_str(), groups.len());
                let mut group = FamilyGroup {
                    representative: row.clone(),
                    color_union: Vec::new(),
                    members: 0,
                };
                group.absorb(row);
                groups.push(group);
            }
        }
    }

    groups
        .into_iter()
        .map(|group| {
            let mut rep = group.representative;
            rep.colors = if group.color_union.is_empty() {
                None
            } else {
                Some(group.color_union)
            };
            rep.variants = Some(u32::try_from(group.members - 1).unwrap_or(u32::MAX));
            rep
        })
        .collect()
}

/// All concrete rows belonging to the family of `member_id`, in input
/// order and unmodified. Unknown ids yield an empty list.
#[must_use]
pub fn family_members(rows: &[Product], member_id: &str) -> Vec<Product> {
    let Some(member) = rows.iter().find(|r| r.id == member_id) else {
        return Vec::new();
    };
    rows.iter()
        .filter(|r| r.name == member.name)
        .cloned()
        .collect()
}

/// The id of the family's first row (the representative's id) for any
/// member id, or `None` when the id is unknown.
#[must_use]
pub fn base_product_id(rows: &[Product], id: &str) -> Option<String> {
    let member = rows.iter().find(|r| r.id == id)?;
    rows.iter()
        .find(|r| r.name == member.name)
        .map(|r| r.id.clone())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn make_row(id: &str, name: &str, color: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            brand: "Vitrine".to_string(),
            price: Decimal::new(2_500, 2),
            original_price: None,
            image: format!("/images/{id}.jpg"),
            images: vec![],
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

    fn cube_and_sphere() -> Vec<Product> {
        vec![
            make_row("a1", "Cube", Some("white")),
            make_row("a2", "Cube", Some("black")),
            make_row("b1", "Sphere", Some("red")),
        ]
    }

    #[test]
    fn groups_rows_into_first_seen_families() {
        let reps = family_representatives(&cube_and_sphere());
        assert_eq!(reps.len(), 2);

        assert_eq!(reps[0].id, "a1");
        assert_eq!(reps[0].colors.as_deref(), Some(["white".to_string(), "black".to_string()].as_slice()));
        assert_eq!(reps[0].variants, Some(1));

        assert_eq!(reps[1].id, "b1");
        assert_eq!(reps[1].colors.as_deref(), Some(["red".to_string()].as_slice()));
        assert_eq!(reps[1].variants, Some(0));
    }

    #[test]
    fn representative_keeps_its_own_row_fields() {
        let mut rows = cube_and_sphere();
        rows[0].sizes = Some(vec!["S".to_string()]);
        rows[1].sizes = Some(vec!["XL".to_string()]);

        let reps = family_representatives(&rows);
        // Only colors and variants are rewritten; sizes stay the first row's.
        assert_eq!(reps[0].sizes.as_deref(), Some(["S".to_string()].as_slice()));
        assert_eq!(reps[0].color.as_deref(), Some("white"));
    }

    #[test]
    fn union_includes_preset_color_lists_without_duplicates() {
        let mut rows = cube_and_sphere();
        rows[1].colors = Some(vec!["black".to_string(), "ecru".to_string()]);

        let reps = family_representatives(&rows);
        assert_eq!(
            reps[0].colors.as_deref(),
            Some(["white".to_string(), "black".to_string(), "ecru".to_string()].as_slice())
        );
    }

    #[test]
    fn colorless_rows_form_singleton_families_with_no_union() {
        let rows = vec![make_row("c1", "Hair Claw", None)];
        let reps = family_representatives(&rows);
        assert_eq!(reps.len(), 1);
        assert_eq!(reps[0].colors, None);
        assert_eq!(reps[0].variants, Some(0));
    }

    #[test]
    fn same_name_rows_merge_even_without_shared_attributes() {
        let rows = vec![
            make_row("x1", "Classic Tee", Some("white")),
            make_row("x2", "Classic Tee", None),
        ];
        let reps = family_representatives(&rows);
        assert_eq!(reps.len(), 1);
        assert_eq!(reps[0].id, "x1");
        assert_eq!(reps[0].variants, Some(1));
        assert_eq!(reps[0].colors.as_deref(), Some(["white".to_string()].as_slice()));
    }

    #[test]
    fn regrouping_a_family_list_merges_and_reorders_nothing() {
        let reps = family_representatives(&cube_and_sphere());
        let again = family_representatives(&reps);

        assert_eq!(again.len(), reps.len());
        for (second, first) in again.iter().zip(&reps) {
            assert_eq!(second.id, first.id);
            assert_eq!(second.colors, first.colors);
            // Sibling counts are relative to the input list, and every
            // family is now a singleton.
            assert_eq!(second.variants, Some(0));
        }
    }

    #[test]
    fn family_members_returns_siblings_in_input_order() {
        let rows = cube_and_sphere();
        let members = family_members(&rows, "a1");
        let ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["a1", "a2"]);
        // Members come back as stored, not as representatives.
        assert_eq!(members[0].colors, None);
        assert_eq!(members[0].variants, None);
    }

    #[test]
    fn family_members_of_unknown_id_is_empty() {
        assert!(family_members(&cube_and_sphere(), "zz").is_empty());
    }

    #[test]
    fn base_product_id_resolves_any_member_to_the_first_row() {
        let rows = cube_and_sphere();
        assert_eq!(base_product_id(&rows, "a2").as_deref(), Some("a1"));
        assert_eq!(base_product_id(&rows, "a1").as_deref(), Some("a1"));
        assert_eq!(base_product_id(&rows, "b1").as_deref(), Some("b1"));
        assert_eq!(base_product_id(&rows, "zz"), None);
    }

    #[test]
    fn base_product_id_roundtrips_through_family_members() {
        let rows = cube_and_sphere();
        for row in &rows {
            let base = base_product_id(&rows, &row.id).expect("known id");
            let members = family_members(&rows, &base);
            assert!(members.iter().any(|m| m.id == row.id));
            assert_eq!(members[0].id, base);
        }
    }
}
