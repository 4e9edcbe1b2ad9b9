//! Storefront-facing catalog access.
//!
//! This crate is the single entry point callers use: [`catalog`] hands out
//! the process-wide repository chosen from configuration, backed either by
//! the built-in fixture dataset ([`InMemoryCatalog`]) or by Postgres. Both
//! backends answer through the same [`CatalogRepository`] trait and the same
//! family-grouping rules, so swapping one for the other is a configuration
//! change, not a code change.

pub mod fixtures;
pub mod memory;
pub mod selector;

pub use memory::InMemoryCatalog;
pub use selector::{catalog, from_config};
pub use vitrine_core::{
    CatalogQuery, CatalogRepository, FilterState, Page, Product, SortOrder,
};
