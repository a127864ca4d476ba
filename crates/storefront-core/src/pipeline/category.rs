//! Category filter stage.

use std::collections::HashSet;

use crate::model::Product;

/// Distinct category labels in first-seen order.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}

/// Keep products of `category`, or everything when no category is selected.
///
/// A category that no product carries yields an empty list.
pub fn filter_by_category(products: Vec<Product>, category: Option<&str>) -> Vec<Product> {
    match category {
        None => products,
        Some(category) => products
            .into_iter()
            .filter(|p| p.category == category)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::product;

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Backpack", "men's clothing", 109.95, 3.9),
            product(2, "Ring", "jewelery", 9.99, 3.0),
            product(3, "T-Shirt", "men's clothing", 22.3, 4.1),
            product(4, "SSD", "electronics", 109.0, 4.8),
            product(5, "Bracelet", "jewelery", 695.0, 4.6),
        ]
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(
            categories(&catalog()),
            vec!["men's clothing", "jewelery", "electronics"]
        );
    }

    #[test]
    fn test_categories_empty() {
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn test_filter_none_returns_all() {
        let all = catalog();
        assert_eq!(filter_by_category(all.clone(), None), all);
    }

    #[test]
    fn test_filter_by_category() {
        let result = filter_by_category(catalog(), Some("jewelery"));
        let ids: Vec<_> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn test_filter_absent_category_is_empty() {
        assert!(filter_by_category(catalog(), Some("books")).is_empty());
    }

    #[test]
    fn test_filter_is_exact_match() {
        assert!(filter_by_category(catalog(), Some("Jewelery")).is_empty());
    }
}
