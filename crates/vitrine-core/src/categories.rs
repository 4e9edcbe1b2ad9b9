//! Public category taxonomy.
//!
//! Navigation exposes public category names that fan out to one or more
//! stored category values (`"clothing"` covers both apparel departments).
//! Names without a group entry pass through unchanged, so stored values are
//! always addressable directly.

const CATEGORY_GROUPS: &[(&str, &[&str])] = &[
    ("clothing", &["women", "men"]),
    ("gifts", &["home", "accessories"]),
];

/// The stored category values a public name expands to, when the name is a
/// defined group. `None` means the name is used as a literal category.
#[must_use]
pub fn expand_category(public_name: &str) -> Option<&'static [&'static str]> {
    CATEGORY_GROUPS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(public_name))
        .map(|(_, members)| *members)
}

/// Whether a stored category value falls under a public category name.
/// Comparison is case-insensitive on both sides.
#[must_use]
pub fn category_matches(public_name: &str, stored: &str) -> bool {
    match expand_category(public_name) {
        Some(members) => members.iter().any(|m| m.eq_ignore_ascii_case(stored)),
        None => public_name.eq_ignore_ascii_case(stored),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clothing_covers_both_apparel_departments() {
        assert!(category_matches("clothing", "women"));
        assert!(category_matches("clothing", "men"));
        assert!(!category_matches("clothing", "beauty"));
    }

    #[test]
    fn gifts_covers_home_and_accessories() {
        assert!(category_matches("gifts", "home"));
        assert!(category_matches("gifts", "accessories"));
        assert!(!category_matches("gifts", "women"));
    }

    #[test]
    fn stored_values_pass_through_as_literals() {
        assert!(category_matches("women", "women"));
        assert!(category_matches("beauty", "beauty"));
        assert!(!category_matches("women", "men"));
    }

    #[test]
    fn matching_ignores_case_on_both_sides() {
        assert!(category_matches("Clothing", "WOMEN"));
        assert!(category_matches("BEAUTY", "beauty"));
    }

    #[test]
    fn unknown_names_match_nothing_in_the_catalog() {
        assert!(!category_matches("electronics", "women"));
        assert_eq!(expand_category("electronics"), None);
        assert_eq!(expand_category("clothing"), Some(["women", "men"].as_slice()));
    }
}
