//! Catalog data model.
//!
//! Products are immutable value objects: the catalog only reorders, filters
//! and slices them.

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Externally assigned product identifier.
pub type ProductId = u64;

/// Highest rating a product can carry.
pub const MAX_RATE: f64 = 5.0;

/// Average review score together with the number of reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score in `0.0..=5.0`.
    pub rate: f64,
    /// Number of reviews.
    pub count: u32,
}

/// A catalog item as served by the product API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Image URL.
    pub image: String,
    pub rating: Rating,
}

impl Product {
    /// Price as a sort key.
    ///
    /// Fails when the price is NaN, infinite or negative.
    pub fn price_key(&self) -> Result<f64, DataError> {
        if self.price.is_finite() && self.price >= 0.0 {
            Ok(self.price)
        } else {
            Err(DataError::InvalidPrice { id: self.id })
        }
    }

    /// Rating rate as a sort key.
    ///
    /// Fails when the rate is NaN or outside `0.0..=5.0`.
    pub fn rate_key(&self) -> Result<f64, DataError> {
        if (0.0..=MAX_RATE).contains(&self.rating.rate) {
            Ok(self.rating.rate)
        } else {
            Err(DataError::InvalidRating { id: self.id })
        }
    }

    /// Number of filled stars out of five (`rate` rounded half up).
    pub fn filled_stars(&self) -> usize {
        let rate = self.rating.rate;
        if rate.is_nan() {
            return 0;
        }
        rate.clamp(0.0, MAX_RATE).round() as usize
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::product;
    use super::*;

    #[test]
    fn test_deserialize_api_payload() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.count, 120);
        assert!((product.price - 109.95).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sort_keys_reject_invalid_values() {
        assert_eq!(product(1, "a", "x", 2.5, 4.0).price_key(), Ok(2.5));
        assert_eq!(
            product(2, "a", "x", f64::NAN, 4.0).price_key(),
            Err(DataError::InvalidPrice { id: 2 })
        );
        assert_eq!(
            product(3, "a", "x", -1.0, 4.0).price_key(),
            Err(DataError::InvalidPrice { id: 3 })
        );
        assert_eq!(
            product(4, "a", "x", 1.0, f64::NAN).rate_key(),
            Err(DataError::InvalidRating { id: 4 })
        );
        assert_eq!(
            product(5, "a", "x", 1.0, 5.5).rate_key(),
            Err(DataError::InvalidRating { id: 5 })
        );
    }

    #[test]
    fn test_filled_stars() {
        assert_eq!(product(1, "a", "x", 1.0, 3.9).filled_stars(), 4);
        assert_eq!(product(1, "a", "x", 1.0, 2.5).filled_stars(), 3);
        assert_eq!(product(1, "a", "x", 1.0, 2.4).filled_stars(), 2);
        assert_eq!(product(1, "a", "x", 1.0, 0.0).filled_stars(), 0);
        assert_eq!(product(1, "a", "x", 1.0, f64::NAN).filled_stars(), 0);
    }
}
