//! The catalog pipeline.
//!
//! Every user input re-runs the same four pure stages, always in this order:
//!
//! 1. [`filter_by_category`] - narrow to the selected category
//! 2. [`sort_products`] - order by price or rating
//! 3. [`search_by_title`] - narrow by title substring
//! 4. [`Page::new`] - slice out the current page
//!
//! Search therefore sees the category-filtered, sorted set, and pagination
//! always works on the final set.

mod category;
mod pagination;
mod search;
mod sort;

use std::num::NonZeroUsize;

pub use category::{categories, filter_by_category};
pub use pagination::{Page, total_pages};
pub use search::search_by_title;
pub use sort::sort_products;

use crate::error::DataError;
use crate::model::Product;
use crate::query::CatalogQuery;

/// Everything the list view renders for one pass of the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogView {
    /// Category choices for the filter dropdown, derived from all products.
    pub categories: Vec<String>,
    /// Current page of the filtered, sorted, searched products.
    pub page: Page<Product>,
}

impl CatalogView {
    pub fn rows(&self) -> &[Product] {
        &self.page.items
    }

    /// Number of products that survived filtering and search.
    pub fn total_matches(&self) -> usize {
        self.page.total_items
    }

    pub fn is_empty(&self) -> bool {
        self.page.total_items == 0
    }
}

/// Whether a pipeline result should render as "nothing matched".
///
/// A failed sort is not an empty result: the products matched, they just
/// cannot be ordered.
pub fn no_matches(result: &Result<CatalogView, DataError>) -> bool {
    result.as_ref().is_ok_and(CatalogView::is_empty)
}

/// Run category filter, sort, search and pagination over `products`.
///
/// A requested page beyond the last page is clamped to the last page; the
/// page actually shown is reported in `page.page`.
pub fn run_pipeline(
    products: &[Product],
    query: &CatalogQuery,
    page_size: NonZeroUsize,
) -> Result<CatalogView, DataError> {
    let categories = categories(products);

    let filtered = filter_by_category(products.to_vec(), query.category.as_deref());
    let sorted = sort_products(filtered, query.sort)?;
    let searched = search_by_title(sorted, &query.search);

    let page = query.effective_page(total_pages(searched.len(), page_size));

    Ok(CatalogView {
        categories,
        page: Page::new(searched, page, page_size),
    })
}
