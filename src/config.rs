//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use std::num::NonZeroUsize;

use storefront_core::CategorySource;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page header.
pub const APP_NAME: &str = "Storefront";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the product API (no trailing slash).
pub const API_BASE_URL: &str = "https://fakestoreapi.com";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// How the category filter obtains its products.
///
/// - `Local` filters the list fetched at mount
/// - `Remote` re-fetches `/products/category/{c}` on every selection
pub const CATEGORY_SOURCE: CategorySource = CategorySource::Local;

// =============================================================================
// Catalog Configuration
// =============================================================================

/// Products shown per page in the list view.
pub const PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(5).unwrap();

/// Sales commission shown on the detail view, as a fraction of the price.
pub const COMMISSION_RATE: f64 = 0.10;

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level written to the browser console.
pub const LOG_LEVEL: log::Level = log::Level::Info;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
