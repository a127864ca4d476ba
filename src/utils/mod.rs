//! Utility modules for web, DOM, and display formatting.
//!
//! Provides:
//! - [`fetch_json`], [`fetch_optional_json`] - Network fetching with timeout
//! - [`dom`] - Window, scrolling and URL hash helpers
//! - [`format`] - Price, rating and label formatting

pub mod dom;
mod fetch;
pub mod format;

pub use fetch::{fetch_json, fetch_optional_json};
