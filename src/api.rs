//! HTTP implementation of the product repository.
//!
//! Endpoints (relative to [`API_BASE_URL`]):
//! - `GET /products`
//! - `GET /products/{id}`
//! - `GET /products/categories`
//! - `GET /products/category/{category}`

use storefront_core::{FetchError, Product, ProductId, ProductRepository};

use crate::config::API_BASE_URL;
use crate::utils::{fetch_json, fetch_optional_json};

/// Product API client over the browser Fetch API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpProductRepository {
    base_url: String,
}

impl HttpProductRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl Default for HttpProductRepository {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl ProductRepository for HttpProductRepository {
    async fn list_all(&self) -> Result<Vec<Product>, FetchError> {
        fetch_json(&self.url("products")).await
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, FetchError> {
        let encoded = String::from(js_sys::encode_uri_component(category));
        fetch_json(&self.url(&format!("products/category/{}", encoded))).await
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, FetchError> {
        fetch_optional_json(&self.url(&format!("products/{}", id))).await
    }

    async fn list_categories(&self) -> Result<Vec<String>, FetchError> {
        fetch_json(&self.url("products/categories")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let repo = HttpProductRepository::new("https://api.example.com/");
        assert_eq!(repo.url("products"), "https://api.example.com/products");
        assert_eq!(repo.url("products/5"), "https://api.example.com/products/5");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(
            HttpProductRepository::default().url("products"),
            "https://fakestoreapi.com/products"
        );
    }
}
