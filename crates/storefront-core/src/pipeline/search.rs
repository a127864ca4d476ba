//! Title search stage.

use crate::model::Product;

/// Keep products whose title contains `query`, ignoring case.
///
/// Both sides are lowercased with Unicode rules; the query is not trimmed.
/// An empty query returns the input unchanged.
pub fn search_by_title(products: Vec<Product>, query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products;
    }

    let query_lower = query.to_lowercase();
    products
        .into_iter()
        .filter(|p| p.title.to_lowercase().contains(&query_lower))
        .collect()
}
