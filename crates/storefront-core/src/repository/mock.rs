use std::cell::{Cell, RefCell};

use super::ProductRepository;
use crate::error::FetchError;
use crate::model::{Product, ProductId};

/// In-memory [`ProductRepository`] with switchable transport failure.
#[derive(Debug, Default)]
pub struct MockRepository {
    products: RefCell<Vec<Product>>,
    failure: RefCell<Option<FetchError>>,
    requests: Cell<usize>,
}

impl MockRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RefCell::new(products),
            ..Default::default()
        }
    }

    /// A repository whose every request fails with `error`.
    pub fn failing(error: FetchError) -> Self {
        let repo = Self::default();
        repo.fail_with(Some(error));
        repo
    }

    /// Make subsequent requests fail (`Some`) or succeed again (`None`).
    pub fn fail_with(&self, error: Option<FetchError>) {
        *self.failure.borrow_mut() = error;
    }

    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.borrow_mut() = products;
    }

    /// Number of requests issued so far.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    fn respond<T>(&self, f: impl FnOnce(&[Product]) -> T) -> Result<T, FetchError> {
        self.requests.set(self.requests.get() + 1);
        if let Some(error) = self.failure.borrow().clone() {
            return Err(error);
        }
        Ok(f(&self.products.borrow()))
    }
}

impl ProductRepository for MockRepository {
    async fn list_all(&self) -> Result<Vec<Product>, FetchError> {
        self.respond(|products| products.to_vec())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, FetchError> {
        self.respond(|products| {
            products
                .iter()
                .filter(|p| p.category == category)
                .cloned()
                .collect()
        })
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, FetchError> {
        self.respond(|products| products.iter().find(|p| p.id == id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<String>, FetchError> {
        self.respond(crate::pipeline::categories)
    }
}
