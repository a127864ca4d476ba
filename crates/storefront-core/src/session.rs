//! View sessions: the state a mounted list or detail view owns.
//!
//! Fetch results are applied through [`RequestToken`]s. Only the most
//! recently issued request may update a session; anything older is dropped,
//! so a slow response can never overwrite a newer one.

use std::num::NonZeroUsize;

use crate::error::{DataError, FetchError};
use crate::model::{Product, ProductId};
use crate::pipeline::{CatalogView, categories, run_pipeline};
use crate::query::{CatalogQuery, SortOption};

// ============================================================================
// Request tracking
// ============================================================================

/// Identifies one issued fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Issues monotonically increasing request tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    /// Issue a token that supersedes every earlier one.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

// ============================================================================
// List session
// ============================================================================

/// Where the category filter gets its data from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategorySource {
    /// Filter the already fetched product list; categories are derived from it.
    #[default]
    Local,
    /// Re-fetch `/products/category/{c}` on every selection and load the
    /// category list from the API.
    Remote,
}

impl CategorySource {
    pub fn refetches(self) -> bool {
        matches!(self, Self::Remote)
    }
}

/// Load phase of a list view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Initial fetch in flight.
    #[default]
    Loading,
    /// Products present.
    Ready,
    /// Fetch failed; the view renders as an empty catalog.
    Failed,
}

/// All state of one mounted list view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListSession {
    phase: LoadPhase,
    products: Vec<Product>,
    /// Categories of the last unfiltered load.
    catalog_categories: Option<Vec<String>>,
    remote_categories: Option<Vec<String>>,
    query: CatalogQuery,
    tracker: RequestTracker,
    /// Whether the request in flight fetches a single category.
    scoped: bool,
}

impl ListSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Products as last fetched; empty while loading or after a failure.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Start fetching the whole catalog. The returned token must be handed
    /// back to [`finish_load`](Self::finish_load) with the result.
    pub fn begin_load(&mut self) -> RequestToken {
        self.begin_load_for(None)
    }

    /// Start fetching the products of `category`, or the whole catalog.
    ///
    /// Only whole-catalog results refresh the derived category list, so a
    /// single-category response never narrows the dropdown.
    pub fn begin_load_for(&mut self, category: Option<&str>) -> RequestToken {
        self.scoped = category.is_some();
        self.tracker.issue()
    }

    /// Apply a product fetch result.
    ///
    /// Returns `false` when the response belongs to a superseded request and
    /// was ignored. A failure leaves the session with no products.
    pub fn finish_load(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Product>, FetchError>,
    ) -> bool {
        if !self.tracker.is_current(token) {
            log::debug!("Dropping stale product response {:?}", token);
            return false;
        }

        match result {
            Ok(products) => {
                log::debug!("Loaded {} products", products.len());
                if !self.scoped {
                    self.catalog_categories = Some(categories(&products));
                }
                self.products = products;
                self.phase = LoadPhase::Ready;
            }
            Err(e) => {
                log::error!("Error fetching products: {}", e);
                self.products.clear();
                self.phase = LoadPhase::Failed;
            }
        }
        // Replacing the collection can shrink it below the current page.
        self.query.go_to_page(1);
        true
    }

    /// Apply the result of a category list fetch.
    ///
    /// On failure the dropdown falls back to categories derived from the
    /// fetched products.
    pub fn set_categories(&mut self, result: Result<Vec<String>, FetchError>) {
        match result {
            Ok(categories) => self.remote_categories = Some(categories),
            Err(e) => {
                log::error!("Error fetching categories: {}", e);
                self.remote_categories = None;
            }
        }
    }

    /// Category choices: the API's list when loaded, otherwise derived from
    /// the last whole-catalog load, otherwise from the current products.
    pub fn categories(&self) -> Vec<String> {
        self.remote_categories
            .as_ref()
            .or(self.catalog_categories.as_ref())
            .cloned()
            .unwrap_or_else(|| categories(&self.products))
    }

    pub fn select_category(&mut self, category: Option<String>) {
        self.query.select_category(category);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.set_search(search);
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.query.set_sort(sort);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.query.go_to_page(page);
    }

    /// Run the pipeline over the session's products and query.
    pub fn view(&self, page_size: NonZeroUsize) -> Result<CatalogView, DataError> {
        let mut view = run_pipeline(&self.products, &self.query, page_size).inspect_err(|e| {
            log::warn!("Cannot order products: {}", e);
        })?;
        view.categories = self.categories();
        Ok(view)
    }
}

// ============================================================================
// Detail session
// ============================================================================

/// What a detail view shows for its product id.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Loading,
    Found(Product),
    /// No such product, or the fetch failed. Both render the same way.
    NotFound,
}

impl DetailState {
    /// Collapse a single-product fetch result into a renderable state.
    pub fn from_fetch(id: ProductId, result: Result<Option<Product>, FetchError>) -> Self {
        match result {
            Ok(Some(product)) => Self::Found(product),
            Ok(None) => {
                log::warn!("Product {} not found", id);
                Self::NotFound
            }
            Err(e) => {
                log::error!("Error fetching product {}: {}", id, e);
                Self::NotFound
            }
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            Self::Found(product) => Some(product),
            _ => None,
        }
    }
}

/// State of one mounted detail view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailSession {
    state: DetailState,
    tracker: RequestTracker,
}

impl DetailSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session for an id that cannot name any product; nothing is fetched.
    pub fn not_found() -> Self {
        Self {
            state: DetailState::NotFound,
            tracker: RequestTracker::default(),
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Start fetching a product and show the loading state.
    pub fn begin_load(&mut self) -> RequestToken {
        self.state = DetailState::Loading;
        self.tracker.issue()
    }

    /// Apply a fetch result; stale results are ignored and `false` returned.
    pub fn finish_load(
        &mut self,
        token: RequestToken,
        id: ProductId,
        result: Result<Option<Product>, FetchError>,
    ) -> bool {
        if !self.tracker.is_current(token) {
            log::debug!("Dropping stale response for product {}", id);
            return false;
        }
        self.state = DetailState::from_fetch(id, result);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::product;
    use crate::query::{SortDirection, SortKey};

    const PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

    fn catalog(n: u64) -> Vec<Product> {
        (1..=n)
            .map(|id| product(id, &format!("Item {}", id), "misc", id as f64, 3.0))
            .collect()
    }

    #[test]
    fn test_tracker_supersedes() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(first < second);
    }

    #[test]
    fn test_list_starts_loading() {
        let session = ListSession::new();
        assert!(session.is_loading());
        assert!(session.products().is_empty());
        assert_eq!(session.query(), &CatalogQuery::new());
    }

    #[test]
    fn test_list_ready_after_load() {
        let mut session = ListSession::new();
        let token = session.begin_load();
        assert!(session.finish_load(token, Ok(catalog(3))));
        assert_eq!(session.phase(), LoadPhase::Ready);
        assert_eq!(session.products().len(), 3);
    }

    #[test]
    fn test_list_failure_renders_empty() {
        let mut session = ListSession::new();
        let token = session.begin_load();
        assert!(session.finish_load(token, Err(FetchError::Timeout)));
        assert_eq!(session.phase(), LoadPhase::Failed);

        let view = session.view(PAGE_SIZE).unwrap();
        assert!(view.rows().is_empty());
        assert_eq!(view.page.total_pages, 0);
    }

    #[test]
    fn test_stale_response_dropped() {
        let mut session = ListSession::new();
        let slow = session.begin_load();
        let fast = session.begin_load();

        assert!(session.finish_load(fast, Ok(catalog(2))));
        assert!(!session.finish_load(slow, Ok(catalog(9))));
        assert_eq!(session.products().len(), 2);
    }

    #[test]
    fn test_stale_failure_does_not_clear() {
        let mut session = ListSession::new();
        let slow = session.begin_load();
        let fast = session.begin_load();

        session.finish_load(fast, Ok(catalog(4)));
        session.finish_load(slow, Err(FetchError::HttpError(500)));
        assert_eq!(session.phase(), LoadPhase::Ready);
        assert_eq!(session.products().len(), 4);
    }

    #[test]
    fn test_reload_resets_page() {
        let mut session = ListSession::new();
        let token = session.begin_load();
        session.finish_load(token, Ok(catalog(12)));
        session.go_to_page(3);

        let token = session.begin_load();
        session.finish_load(token, Ok(catalog(4)));
        assert_eq!(session.query().page, 1);
        assert_eq!(session.view(PAGE_SIZE).unwrap().rows().len(), 4);
    }

    #[test]
    fn test_controls_delegate_to_query() {
        let mut session = ListSession::new();
        let token = session.begin_load();
        session.finish_load(token, Ok(catalog(12)));

        session.go_to_page(3);
        session.set_search("item 1");
        assert_eq!(session.query().page, 1);

        session.go_to_page(2);
        session.set_sort(SortOption::new(SortKey::Price, SortDirection::Descending));
        assert_eq!(session.query().page, 2);

        session.select_category(Some("misc".to_string()));
        assert_eq!(session.query().page, 1);
    }

    #[test]
    fn test_remote_categories_override_derived() {
        let mut session = ListSession::new();
        let token = session.begin_load();
        session.finish_load(token, Ok(catalog(3)));
        assert_eq!(session.view(PAGE_SIZE).unwrap().categories, vec!["misc"]);

        session.set_categories(Ok(vec!["electronics".to_string(), "misc".to_string()]));
        assert_eq!(
            session.view(PAGE_SIZE).unwrap().categories,
            vec!["electronics", "misc"]
        );

        session.set_categories(Err(FetchError::Timeout));
        assert_eq!(session.view(PAGE_SIZE).unwrap().categories, vec!["misc"]);
        assert_eq!(session.categories(), vec!["misc"]);
    }

    #[test]
    fn test_category_refetch_keeps_full_category_list() {
        let mut session = ListSession::new();
        let token = session.begin_load();
        session.finish_load(
            token,
            Ok(vec![
                product(1, "Shirt", "clothing", 10.0, 3.0),
                product(2, "Ring", "jewelery", 20.0, 4.0),
            ]),
        );
        session.set_categories(Err(FetchError::Timeout));

        session.select_category(Some("jewelery".to_string()));
        let token = session.begin_load_for(Some("jewelery"));
        session.finish_load(token, Ok(vec![product(2, "Ring", "jewelery", 20.0, 4.0)]));

        assert_eq!(session.products().len(), 1);
        assert_eq!(session.categories(), vec!["clothing", "jewelery"]);
        assert_eq!(
            session.view(PAGE_SIZE).unwrap().categories,
            vec!["clothing", "jewelery"]
        );
    }

    #[test]
    fn test_unfiltered_reload_refreshes_categories() {
        let mut session = ListSession::new();
        let token = session.begin_load();
        session.finish_load(token, Ok(catalog(2)));

        let token = session.begin_load_for(None);
        session.finish_load(token, Ok(vec![product(9, "Ring", "jewelery", 1.0, 1.0)]));
        assert_eq!(session.categories(), vec!["jewelery"]);
    }

    #[test]
    fn test_categories_survive_data_error() {
        let mut session = ListSession::new();
        let token = session.begin_load();
        session.finish_load(token, Ok(vec![product(1, "a", "misc", f64::NAN, 1.0)]));
        session.set_sort(SortOption::new(SortKey::Price, SortDirection::Ascending));

        assert_eq!(session.view(PAGE_SIZE), Err(DataError::InvalidPrice { id: 1 }));
        assert_eq!(session.categories(), vec!["misc"]);
    }

    #[test]
    fn test_detail_states() {
        let item = product(3, "Ring", "jewelery", 9.99, 3.0);
        assert_eq!(
            DetailState::from_fetch(3, Ok(Some(item.clone()))),
            DetailState::Found(item)
        );
        assert_eq!(DetailState::from_fetch(3, Ok(None)), DetailState::NotFound);
        assert_eq!(
            DetailState::from_fetch(3, Err(FetchError::NetworkError("offline".into()))),
            DetailState::NotFound
        );
    }

    #[test]
    fn test_detail_not_found_session() {
        let session = DetailSession::not_found();
        assert_eq!(session.state(), &DetailState::NotFound);
        assert_eq!(DetailSession::new().state(), &DetailState::Loading);
    }

    #[test]
    fn test_detail_session_drops_stale() {
        let mut session = DetailSession::new();
        let first = session.begin_load();
        let second = session.begin_load();

        assert!(session.finish_load(second, 2, Ok(None)));
        assert!(!session.finish_load(first, 1, Ok(Some(product(1, "a", "x", 1.0, 1.0)))));
        assert_eq!(session.state(), &DetailState::NotFound);
        assert!(session.state().product().is_none());
    }
}
