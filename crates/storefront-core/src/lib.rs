//! Platform-independent core of the storefront catalog browser.
//!
//! - [`Product`], [`Rating`] - Catalog data model
//! - [`CatalogQuery`], [`SortOption`] - User-controlled list state
//! - [`run_pipeline`] - Category filter → sort → search → pagination
//! - [`ProductRepository`] - Read-only product API
//! - [`ListSession`], [`DetailSession`] - View state with stale-response protection
//! - [`FetchError`], [`DataError`] - Error types

pub mod error;
pub mod model;
pub mod pipeline;
pub mod query;
pub mod repository;
pub mod session;

pub use error::{DataError, FetchError};
pub use model::{Product, ProductId, Rating};
pub use pipeline::{CatalogView, Page, no_matches, run_pipeline};
pub use query::{CatalogQuery, SortDirection, SortKey, SortOption};
#[cfg(any(test, feature = "mock"))]
pub use repository::MockRepository;
pub use repository::ProductRepository;
pub use session::{
    CategorySource, DetailSession, DetailState, ListSession, LoadPhase, RequestToken,
};
