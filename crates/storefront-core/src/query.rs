//! The user-controlled state that drives the catalog pipeline.
//!
//! All list controls (category, sort, search, page) live in one
//! [`CatalogQuery`] record so the pipeline stays a pure function of
//! `(products, query, page size)`.

use std::fmt;
use std::str::FromStr;

/// Numeric field a catalog can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    Price,
    /// Orders by `rating.rate`.
    Rating,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Rating => "rating",
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Sort selection as picked from the sort dropdown.
///
/// Encoded as `"{key}-{direction}"` (e.g. `price-desc`); the empty string
/// means "unsorted".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortOption {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortOption {
    /// Every selectable option with its dropdown label, in display order.
    pub const CHOICES: [(SortOption, &'static str); 4] = [
        (SortOption::new(SortKey::Price, SortDirection::Ascending), "Price: Low to High"),
        (SortOption::new(SortKey::Price, SortDirection::Descending), "Price: High to Low"),
        (SortOption::new(SortKey::Rating, SortDirection::Ascending), "Rating: Low to High"),
        (SortOption::new(SortKey::Rating, SortDirection::Descending), "Rating: High to Low"),
    ];

    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Leave the input order untouched.
    pub const fn unsorted() -> Self {
        Self {
            key: None,
            direction: SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key {
            Some(key) => write!(f, "{}-{}", key.as_str(), self.direction.as_str()),
            None => Ok(()),
        }
    }
}

/// Error returned when a sort option string is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort option '{0}'")]
pub struct ParseSortOptionError(String);

impl FromStr for SortOption {
    type Err = ParseSortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::unsorted());
        }

        let invalid = || ParseSortOptionError(s.to_string());
        let (key, direction) = s.split_once('-').ok_or_else(invalid)?;
        let key = match key {
            "price" => SortKey::Price,
            "rating" => SortKey::Rating,
            _ => return Err(invalid()),
        };
        let direction = match direction {
            "asc" => SortDirection::Ascending,
            "desc" => SortDirection::Descending,
            _ => return Err(invalid()),
        };
        Ok(Self::new(key, direction))
    }
}

/// Filter, sort, search and page selection for one list view session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Selected category, `None` for all categories.
    pub category: Option<String>,
    pub sort: SortOption,
    /// Title search text, matched case-insensitively.
    pub search: String,
    /// 1-based current page.
    pub page: usize,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self {
            category: None,
            sort: SortOption::unsorted(),
            search: String::new(),
            page: 1,
        }
    }

    /// Select a category (`None` for all) and go back to the first page.
    pub fn select_category(&mut self, category: Option<String>) {
        self.category = category.filter(|c| !c.is_empty());
        self.page = 1;
    }

    /// Replace the search text and go back to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Change ordering. The current page is kept.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    /// Jump to a page. Page numbers start at 1; `0` is ignored.
    pub fn go_to_page(&mut self, page: usize) {
        if page > 0 {
            self.page = page;
        }
    }

    /// The page the pipeline will actually show for `total_pages`.
    pub fn effective_page(&self, total_pages: usize) -> usize {
        self.page.clamp(1, total_pages.max(1))
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new()
    }
}
