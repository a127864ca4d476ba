//! Data models and types for the application.
//!
//! - [`AppRoute`] - Hash-based navigation between list and detail views

mod route;

pub use route::AppRoute;
