#![allow(dead_code)]
use emojivoto_core::{Item, ItemCatalog, VoteCount};

/// Builds a small catalog fixture from `(code, display)` pairs.
/// Panics if the pairs are invalid (intended for tests).
pub fn catalog_of(pairs: &[(&str, &str)]) -> ItemCatalog {
    let items = pairs.iter().map(|(c, d)| Item::new(*c, *d)).collect();
    ItemCatalog::new(items).expect("Failed to create test catalog")
}

/// Shorthand for a list of vote counts.
pub fn counts(pairs: &[(&str, u64)]) -> Vec<VoteCount> {
    pairs.iter().map(|(c, n)| VoteCount::new(*c, *n)).collect()
}
