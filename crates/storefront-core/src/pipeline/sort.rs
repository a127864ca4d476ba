//! Sort engine stage.

use crate::error::DataError;
use crate::model::Product;
use crate::query::{SortDirection, SortKey, SortOption};

fn sort_value(product: &Product, key: SortKey) -> Result<f64, DataError> {
    let value = match key {
        SortKey::Price => product.price_key()?,
        SortKey::Rating => product.rate_key()?,
    };
    // Fold -0.0 into 0.0 so it ties with 0.0 under total ordering.
    Ok(value + 0.0)
}

/// Order products by the selected key and direction.
///
/// Equal keys fall back to ascending product id in both directions, which
/// makes the result deterministic and the operation idempotent. An unsorted
/// option returns the input unchanged. Any product with an unorderable value
/// in the sorted field fails the whole sort.
pub fn sort_products(products: Vec<Product>, sort: SortOption) -> Result<Vec<Product>, DataError> {
    let Some(key) = sort.key else {
        return Ok(products);
    };

    let mut keyed = products
        .into_iter()
        .map(|p| sort_value(&p, key).map(|value| (value, p)))
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|(a, pa), (b, pb)| {
        let by_value = a.total_cmp(b);
        let by_value = match sort.direction {
            SortDirection::Ascending => by_value,
            SortDirection::Descending => by_value.reverse(),
        };
        by_value.then_with(|| pa.id.cmp(&pb.id))
    });

    Ok(keyed.into_iter().map(|(_, p)| p).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::product;

    fn prices(products: &[Product]) -> Vec<f64> {
        products.iter().map(|p| p.price).collect()
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "a", "x", 10.0, 4.0),
            product(2, "b", "x", 5.0, 2.5),
            product(3, "c", "x", 20.0, 4.9),
        ]
    }

    #[test]
    fn test_price_descending() {
        let sorted = sort_products(
            sample(),
            SortOption::new(SortKey::Price, SortDirection::Descending),
        )
        .unwrap();
        assert_eq!(prices(&sorted), vec![20.0, 10.0, 5.0]);
    }

    #[test]
    fn test_price_ascending() {
        let sorted = sort_products(
            sample(),
            SortOption::new(SortKey::Price, SortDirection::Ascending),
        )
        .unwrap();
        assert_eq!(prices(&sorted), vec![5.0, 10.0, 20.0]);
    }

    #[test]
    fn test_rating_orders_by_rate() {
        let sorted = sort_products(
            sample(),
            SortOption::new(SortKey::Rating, SortDirection::Descending),
        )
        .unwrap();
        assert_eq!(ids(&sorted), vec![3, 1, 2]);
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let input = vec![
            product(9, "a", "x", 3.0, 1.0),
            product(2, "b", "x", 1.0, 1.0),
            product(5, "c", "x", 2.0, 1.0),
        ];
        assert_eq!(sort_products(input.clone(), SortOption::unsorted()).unwrap(), input);
    }

    #[test]
    fn test_unsorted_ignores_invalid_values() {
        let input = vec![product(1, "a", "x", f64::NAN, 1.0)];
        assert!(sort_products(input, SortOption::unsorted()).is_ok());
    }

    #[test]
    fn test_ties_broken_by_id() {
        let input = vec![
            product(7, "a", "x", 5.0, 1.0),
            product(3, "b", "x", 5.0, 1.0),
            product(5, "c", "x", 1.0, 1.0),
        ];
        let asc = sort_products(
            input.clone(),
            SortOption::new(SortKey::Price, SortDirection::Ascending),
        )
        .unwrap();
        assert_eq!(ids(&asc), vec![5, 3, 7]);

        let desc = sort_products(
            input,
            SortOption::new(SortKey::Price, SortDirection::Descending),
        )
        .unwrap();
        assert_eq!(ids(&desc), vec![3, 7, 5]);
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let input = vec![product(2, "a", "x", -0.0, 1.0), product(1, "b", "x", 0.0, 1.0)];
        let sorted = sort_products(
            input,
            SortOption::new(SortKey::Price, SortDirection::Ascending),
        )
        .unwrap();
        assert_eq!(ids(&sorted), vec![1, 2]);
    }

    #[test]
    fn test_nan_is_surfaced() {
        let input = vec![product(1, "a", "x", 1.0, 1.0), product(2, "b", "x", f64::NAN, 1.0)];
        let result = sort_products(
            input,
            SortOption::new(SortKey::Price, SortDirection::Ascending),
        );
        assert_eq!(result, Err(DataError::InvalidPrice { id: 2 }));
    }

    #[test]
    fn test_invalid_rating_only_matters_when_sorting_by_rating() {
        let input = vec![product(1, "a", "x", 1.0, 9.0)];
        assert!(sort_products(
            input.clone(),
            SortOption::new(SortKey::Price, SortDirection::Ascending)
        )
        .is_ok());
        assert_eq!(
            sort_products(input, SortOption::new(SortKey::Rating, SortDirection::Ascending)),
            Err(DataError::InvalidRating { id: 1 })
        );
    }
}
