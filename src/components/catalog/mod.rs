//! Product list view.
//!
//! Components:
//! - [`ProductList`] - Owns the list session and runs the pipeline
//! - [`Toolbar`] - Search box, category and sort dropdowns
//! - [`ProductTable`] - Rows of the current page
//! - [`Pagination`] - Page buttons

mod pagination;
mod product_list;
mod product_row;
mod toolbar;

pub use pagination::Pagination;
pub use product_list::ProductList;
pub use product_row::ProductTable;
pub use toolbar::Toolbar;
