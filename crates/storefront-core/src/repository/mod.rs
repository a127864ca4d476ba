//! Read-only access to the product API.
//!
//! The browser build implements [`ProductRepository`] over HTTP; tests use
//! [`MockRepository`] (behind the `mock` feature).

#[cfg(any(test, feature = "mock"))]
mod mock;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockRepository;

use crate::error::FetchError;
use crate::model::{Product, ProductId};

/// Remote product catalog.
///
/// Futures are not required to be `Send`: they run on the single-threaded
/// browser event loop.
#[allow(async_fn_in_trait)]
pub trait ProductRepository {
    /// Every product in the catalog.
    async fn list_all(&self) -> Result<Vec<Product>, FetchError>;

    /// Products of one category.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, FetchError>;

    /// A single product; `Ok(None)` when the API has no such product.
    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, FetchError>;

    /// Category labels known to the API.
    async fn list_categories(&self) -> Result<Vec<String>, FetchError>;

    /// `list_by_category` for a selected category, `list_all` otherwise.
    async fn list_for(&self, category: Option<&str>) -> Result<Vec<Product>, FetchError> {
        match category {
            Some(category) => self.list_by_category(category).await,
            None => self.list_all().await,
        }
    }
}
