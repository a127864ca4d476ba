//! Hash-based routing.

use storefront_core::ProductId;

use crate::utils::dom;

/// Application routes.
///
/// URL format:
/// - `#/` - product list
/// - `#/product/{id}` - product detail
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Product list: `#/`, empty hash, or any unrecognised path.
    List,
    /// Product detail. `id` is `None` when the URL segment is not a valid id,
    /// which renders as "not found".
    Product { id: Option<ProductId> },
}

impl AppRoute {
    /// Parse URL hash into AppRoute.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path.split_once('/') {
            Some(("product", id)) => Self::Product {
                id: id.parse().ok(),
            },
            _ => Self::List,
        }
    }

    /// Convert AppRoute to URL hash.
    ///
    /// `None` for a product route without a valid id, which has no URL of
    /// its own.
    pub fn to_hash(&self) -> Option<String> {
        match self {
            Self::List => Some("#/".to_string()),
            Self::Product { id: Some(id) } => Some(format!("#/product/{}", id)),
            Self::Product { id: None } => None,
        }
    }

    /// Route to a product's detail view.
    pub fn product(id: ProductId) -> Self {
        Self::Product { id: Some(id) }
    }

    /// Get current route from browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route.
    ///
    /// Sets the URL hash, which records a history entry and fires
    /// `hashchange` for the router.
    pub fn push(&self) {
        match self.to_hash() {
            Some(hash) => dom::set_hash(&hash),
            None => log::warn!("Ignoring navigation to {:?}", self),
        }
    }
}
